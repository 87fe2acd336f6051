use serde::Serialize;

/// Coordinates reported by the browser at self-check-in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Both values must be present and within range, otherwise the check-in
    /// simply carries no location.
    pub fn parse(latitude: Option<&str>, longitude: Option<&str>) -> Option<Location> {
        let latitude = latitude?.trim().parse::<f64>().ok()?;
        let longitude = longitude?.trim().parse::<f64>().ok()?;
        let in_range = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        in_range.then_some(Location {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub id: i64,
    pub nome: String,
    pub grupo: String,
    pub telefone: String,
    pub email: String,
    pub observacoes: String,
    pub presente: bool,
    pub data_checkin: Option<i64>,
    pub location: Option<Location>,
    pub criado: i64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewMember {
    pub nome: String,
    pub grupo: String,
    pub telefone: String,
    pub email: String,
    pub observacoes: String,
}

impl NewMember {
    pub fn new(nome: impl Into<String>, grupo: impl Into<String>) -> Self {
        Self {
            nome: nome.into(),
            grupo: grupo.into(),
            ..Default::default()
        }
    }

    pub fn with_contact(mut self, telefone: impl Into<String>, email: impl Into<String>) -> Self {
        self.telefone = telefone.into();
        self.email = email.into();
        self
    }
}
