pub mod application {
    pub mod pantry_item {
        pub mod expiry_alerts;
        pub mod remove;
        pub mod restore_out_of_stock;
    }
    pub mod session {
        pub mod end;
        pub mod get;
        pub mod start;
    }
    pub mod shopping_item {
        pub mod add;
        pub mod checkout;
        pub mod remove;
        pub mod resolve_pending;
        pub mod submit;
    }
    pub mod suggestion {
        pub mod generate;
    }
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod policy;
    pub mod reference_data;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod pantry_item {
        pub mod errors;
        pub mod expiry;
        pub mod model;
        pub mod value_objects;
        pub mod use_cases {
            pub mod expiry_alerts;
            pub mod remove;
            pub mod restore_out_of_stock;
        }
    }
    pub mod session {
        pub mod cart;
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod sample;
        pub mod use_cases {
            pub mod end;
            pub mod get;
            pub mod start;
        }
    }
    pub mod shopping_item {
        pub mod model;
        pub mod use_cases {
            pub mod add;
            pub mod checkout;
            pub mod remove;
            pub mod resolve_pending;
            pub mod submit;
        }
    }
    pub mod suggestion {
        pub mod engine;
        pub mod model;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
