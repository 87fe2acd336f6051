pub(crate) mod http;

// re-export items from sub-modules
pub use http::ata::*;
pub use http::checkin::*;
pub use http::import::*;
pub use http::index::*;
pub use http::login::*;
pub use http::logout::*;
pub use http::members::*;
pub use http::painel::*;
