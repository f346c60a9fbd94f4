/// Iterator over the payloads of a raw mov_text subtitle stream.
///
/// The stream is a sequence of packets, each a 2-byte big-endian payload
/// length followed by exactly that many payload bytes. A truncated trailing
/// prefix, or a prefix claiming more bytes than remain, ends iteration early
/// rather than erroring; everything framed so far is still valid.
pub struct PacketFramer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PacketFramer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl<'a> Iterator for PacketFramer<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.pos + 2 > self.data.len() {
            return None;
        }

        let length = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]) as usize;
        let start = self.pos + 2;
        if start + length > self.data.len() {
            return None;
        }

        self.pos = start + length;
        Some(&self.data[start..start + length])
    }
}
