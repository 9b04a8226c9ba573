pub mod arguments;
pub mod assembler;
pub mod defaults;
pub mod paths;
