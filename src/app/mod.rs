pub mod envy;
