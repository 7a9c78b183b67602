pub mod hammer;
