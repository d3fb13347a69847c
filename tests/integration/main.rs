#[path = "../fixtures/mod.rs"]
#[allow(dead_code)]
mod fixtures;

mod test_main_entry_point;
