pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear;
        pub mod get;
        pub mod remove_item;
    }
    pub mod image {
        pub mod fetch_image;
    }
    pub mod order {
        pub mod get_all;
        pub mod get_by_id;
        pub mod list_all;
        pub mod place;
        pub mod update_status;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod list;
        pub mod update;
    }
    pub mod user {
        pub mod login;
        pub mod register;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod image {
        pub mod cache;
        pub mod errors;
        pub mod fetcher;
        pub mod loader;
        pub mod locator;
        pub mod payload;
        pub mod use_cases {
            pub mod fetch_image;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod get_by_id;
            pub mod list_all;
            pub mod place;
            pub mod update_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod list;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod password;
        pub mod repository;
        pub mod use_cases {
            pub mod login;
            pub mod register;
        }
    }
}
