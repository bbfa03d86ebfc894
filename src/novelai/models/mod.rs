pub mod generate_image_parameters;
pub mod input_spec;
