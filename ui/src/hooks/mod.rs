pub mod use_converter;
