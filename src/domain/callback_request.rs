use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CallbackRequest {
    pub name: String,
    pub phone: String,
}

impl CallbackRequest {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        CallbackRequest {
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactRequest {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}
