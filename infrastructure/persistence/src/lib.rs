pub mod db;
pub mod basket {
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
}
