mod listener;

pub use listener::ActionListener;
