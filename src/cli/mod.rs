mod send;
mod server;

pub use send::send;
pub use server::serve;
