/// A plaintext password as typed on the login form.
#[derive(PartialEq, Debug)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        match password.is_empty() {
            false => Ok(Password(password)),
            true => Err("Password must not be empty".to_string()),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
