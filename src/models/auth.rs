use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cuerpo de `/auth/login` y `/auth/signup`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Usuario autenticado tal como lo devuelve el backend.
/// Solo `email` es obligatorio; el resto de campos se conserva sin tiparlo.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Cuerpo de error del backend (`{"error": "..."}`)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
