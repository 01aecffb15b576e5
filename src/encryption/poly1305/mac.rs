use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::utils::bytes::{gap, load32_le, load32_le_buf, store32_le};

/// Incremental Poly1305 state.
///
/// The accumulator `h` is held in five 32-bit limbs, the top limb carrying
/// the bits above 2^128. Between blocks `h` stays below `5 · 2^128`, so a
/// single partial reduction after every multiplication is enough.
///
/// A `Poly1305` is a one-time authenticator: it must be created from a
/// fresh key for every message. [`Poly1305::finalize`] consumes the state,
/// and the state is wiped whenever it is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Poly1305 {
    /// Clamped multiplier, from `key[0..16]`.
    r: [u32; 4],
    /// Final pad, from `key[16..32]`.
    pad: [u32; 4],
    /// Accumulator, 130 bits plus headroom.
    h: [u32; 5],
    /// Partially filled block.
    c: [u8; 16],
    /// Number of bytes buffered in `c`.
    c_idx: usize,
}

impl Poly1305 {
    /// Starts an authenticator from a one-time 32-byte key.
    ///
    /// The first half of the key is clamped as Poly1305 requires, the second
    /// half is the pad added to the final tag.
    pub fn new(key: &[u8; 32]) -> Self {
        let mut r = [0u32; 4];
        let mut pad = [0u32; 4];
        load32_le_buf(&mut r, &key[..16]);
        load32_le_buf(&mut pad, &key[16..]);

        r[0] &= 0x0fff_ffff;
        for limb in &mut r[1..] {
            *limb &= 0x0fff_fffc;
        }

        Self {
            r,
            pad,
            h: [0; 5],
            c: [0; 16],
            c_idx: 0,
        }
    }

    /// Absorbs whole 16-byte blocks: `h = (h + block + end · 2^128) · r`.
    ///
    /// `end` is 1 for full message blocks and 0 for the final padded block,
    /// whose terminating 1 bit is already in the buffer.
    fn blocks(&mut self, input: &[u8], end: u32) {
        let [r0, r1, r2, r3] = self.r.map(|limb| limb as u64);
        // (r >> 2) · 5, exploiting the clamped low bits
        let rr0 = (r0 >> 2) * 5;
        let rr1 = (r1 >> 2) + r1;
        let rr2 = (r2 >> 2) + r2;
        let rr3 = (r3 >> 2) + r3;
        let rr4 = r0 & 3;

        let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h;

        for block in input.chunks_exact(16) {
            // h + c, without carry propagation
            let s0 = h0 as u64 + load32_le(&block[0..]) as u64;
            let s1 = h1 as u64 + load32_le(&block[4..]) as u64;
            let s2 = h2 as u64 + load32_le(&block[8..]) as u64;
            let s3 = h3 as u64 + load32_le(&block[12..]) as u64;
            let s4 = (h4 + end) as u64;

            // (h + c) · r, without carry propagation
            let x0 = s0 * r0 + s1 * rr3 + s2 * rr2 + s3 * rr1 + s4 * rr0;
            let x1 = s0 * r1 + s1 * r0 + s2 * rr3 + s3 * rr2 + s4 * rr1;
            let x2 = s0 * r2 + s1 * r1 + s2 * r0 + s3 * rr3 + s4 * rr2;
            let x3 = s0 * r3 + s1 * r2 + s2 * r1 + s3 * r0 + s4 * rr3;
            let x4 = (s4 * rr4) as u32;

            // Partial reduction modulo 2^130 - 5
            let u5 = x4 + (x3 >> 32) as u32;
            let u0 = (u5 >> 2) as u64 * 5 + (x0 & 0xffff_ffff);
            let u1 = (u0 >> 32) + (x1 & 0xffff_ffff) + (x0 >> 32);
            let u2 = (u1 >> 32) + (x2 & 0xffff_ffff) + (x1 >> 32);
            let u3 = (u2 >> 32) + (x3 & 0xffff_ffff) + (x2 >> 32);
            let u4 = (u3 >> 32) as u32 + (u5 & 3);

            h0 = u0 as u32;
            h1 = u1 as u32;
            h2 = u2 as u32;
            h3 = u3 as u32;
            h4 = u4;
        }

        self.h = [h0, h1, h2, h3, h4];
    }

    /// Feeds message bytes. Chunk boundaries do not affect the tag.
    pub fn update(&mut self, mut message: &[u8]) {
        if message.is_empty() {
            return;
        }

        // Complete the buffered block first
        let aligned = gap(self.c_idx, 16).min(message.len());
        self.c[self.c_idx..self.c_idx + aligned].copy_from_slice(&message[..aligned]);
        self.c_idx += aligned;
        message = &message[aligned..];

        if self.c_idx == 16 {
            let block = Zeroizing::new(self.c);
            self.blocks(&block[..], 1);
            self.c_idx = 0;
        }

        // Bulk of the message
        let whole = message.len() & !15;
        self.blocks(&message[..whole], 1);
        message = &message[whole..];

        // Remaining bytes never complete a block here
        self.c[self.c_idx..self.c_idx + message.len()].copy_from_slice(message);
        self.c_idx += message.len();
    }

    /// Produces the 16-byte tag and destroys the state.
    pub fn finalize(mut self) -> [u8; 16] {
        // Last partial block, padded with a single 1 byte
        if self.c_idx != 0 {
            self.c[self.c_idx..].fill(0);
            self.c[self.c_idx] = 1;
            let block = Zeroizing::new(self.c);
            self.blocks(&block[..], 0);
        }

        // Carry out of 2^130 - 5 tells whether to subtract the modulus once
        let mut c: u64 = 5;
        for limb in &self.h[..4] {
            c += *limb as u64;
            c >>= 32;
        }
        c += self.h[4] as u64;
        c = (c >> 2) * 5;

        let mut mac = [0u8; 16];
        for (i, chunk) in mac.chunks_exact_mut(4).enumerate() {
            c += self.h[i] as u64 + self.pad[i] as u64;
            store32_le(chunk, c as u32);
            c >>= 32;
        }
        mac
    }
}
