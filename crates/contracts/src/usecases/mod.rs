pub mod u501_create_campaign;
