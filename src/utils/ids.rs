use uuid::Uuid;

/// Short random id (8 hex chars) not already taken according to `taken`.
pub fn new_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = Uuid::new_v4().simple().to_string()[..8].to_string();
        if !taken(&id) {
            return id;
        }
    }
}
