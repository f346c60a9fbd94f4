mod framer;

pub use framer::PacketFramer;
