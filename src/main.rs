mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod artwork;
        pub mod selection;
        pub mod toggle_count;
    }
}

mod usecase {
    pub mod ports {
        pub mod source;
    }
    pub mod services {
        pub mod selection_service;
        pub mod table_controller;
    }
}

mod infra {
    pub mod artic {
        pub mod client;
        pub mod dto;
    }
}

mod ui {
    pub mod components {
        pub mod artwork_table;
        pub mod header_checkbox;
        pub mod paginator;
    }
    pub mod state {
        pub mod app_state;
    }
    pub mod styles;
}

mod platform {
    #[cfg(feature = "desktop")]
    pub mod desktop {
        pub mod launch;
        pub mod logging;
    }
    #[cfg(all(not(feature = "desktop"), target_arch = "wasm32"))]
    pub mod web {
        pub mod logging;
    }
}

#[cfg(test)]
mod tests;

fn main() {
    #[cfg(feature = "desktop")]
    platform::desktop::launch::launch(&config::AppConfig::default());

    #[cfg(not(feature = "desktop"))]
    {
        #[cfg(target_arch = "wasm32")]
        platform::web::logging::init_logging(&config::AppConfig::default());
        dioxus::launch(app::App);
    }
}
