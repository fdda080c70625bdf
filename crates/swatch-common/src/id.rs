/// A fresh UUID v4 string, used as the default identity of color entries.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
