pub mod application {
    pub mod basket {
        pub mod delete;
        pub mod get;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
