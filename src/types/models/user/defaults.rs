pub fn default_is_active() -> bool {
    true
}
