use serde_json::Value;

use super::models::admin::Admin;

/// Records that carry a password which must never leave the service.
pub trait Sanitize {
    fn remove_password(&mut self);
}

impl Sanitize for Admin {
    fn remove_password(&mut self) {
        self.password = None;
    }
}

/// Raw records keep their attributes under `dataValues`.
impl Sanitize for Value {
    fn remove_password(&mut self) {
        if let Some(values) = self.get_mut("dataValues").and_then(Value::as_object_mut) {
            values.remove("password");
        }
    }
}

pub fn admin_transformer<T: Sanitize>(mut admin: T) -> T {
    admin.remove_password();
    admin
}

pub fn admins_transformer<T: Sanitize>(admins: Vec<T>) -> Vec<T> {
    admins.into_iter().map(admin_transformer).collect()
}
