pub mod error;

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod models {
    pub mod conflict;
    pub mod conversion;
    pub mod format;
}

pub mod service {
    pub mod config_service;
    pub mod conflict;
    pub mod ffmpeg;
    pub mod resolver;
    pub mod terminal;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod conversion_facade;
    pub mod ports {
        pub mod facade_ports;
    }
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod action {
    pub mod cli;
    pub mod interactive;
}

pub mod utils {
    pub mod convert;
    pub mod utils;
}
