// RSA Block Codec
// Reversible mapping between byte strings and sequences of integers bounded
// below the modulus, with explicit length framing

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::{Error, Result};

/// One integer-encoded unit of plaintext or ciphertext, always in [0, n).
pub type Block = BigUint;

/// Ordered sequence of blocks; order is the only framing in the stream.
pub type Ciphertext = Vec<Block>;

/// Fixed block width in bytes for a modulus: floor((bits(n) - 1) / 8).
///
/// One byte narrower than the modulus itself, so every `width`-byte chunk is
/// strictly below `n` by construction. Fails with [`Error::BlockOverflow`]
/// when the modulus cannot hold even a single byte (n < 2^8).
pub fn block_width(modulus: &BigUint) -> Result<usize> {
    let bits = modulus.bits();
    let width = (bits.saturating_sub(1) / 8) as usize;
    if width == 0 {
        return Err(Error::BlockOverflow { modulus_bits: bits });
    }
    Ok(width)
}

/// Encode a byte string as blocks under `modulus`.
///
/// The message is split into consecutive `width`-byte chunks, each read as a
/// big-endian unsigned integer. The first emitted block is a header holding
/// the byte length of the final chunk (`width` when the message divides
/// evenly, 0 for the empty message); a short final chunk is right-padded
/// with zero bytes before conversion.
pub fn encode(message: &[u8], modulus: &BigUint) -> Result<Vec<Block>> {
    let width = block_width(modulus)?;

    let tail_len = if message.is_empty() {
        0
    } else {
        match message.len() % width {
            0 => width,
            partial => partial,
        }
    };

    let mut blocks = Vec::with_capacity(message.len() / width + 2);
    blocks.push(BigUint::from(tail_len));
    for chunk in message.chunks(width) {
        if chunk.len() == width {
            blocks.push(BigUint::from_bytes_be(chunk));
        } else {
            let mut padded = chunk.to_vec();
            padded.resize(width, 0);
            blocks.push(BigUint::from_bytes_be(&padded));
        }
    }
    Ok(blocks)
}

/// Decode a block sequence produced by [`encode`] back into bytes.
///
/// Every block must be below the modulus and every chunk block must fit the
/// fixed width; the header determines how many trailing pad bytes to strip
/// from the final chunk. Any inconsistency yields [`Error::MalformedBlock`].
pub fn decode(blocks: &[Block], modulus: &BigUint) -> Result<Vec<u8>> {
    let width = block_width(modulus)?;

    let (header, chunks) = blocks
        .split_first()
        .ok_or_else(|| Error::MalformedBlock("empty block sequence".into()))?;

    for block in blocks {
        if block >= modulus {
            return Err(Error::MalformedBlock(format!(
                "block value has {} bits, modulus only {}",
                block.bits(),
                modulus.bits()
            )));
        }
    }

    let tail_len = header
        .to_u64()
        .map(|len| len as usize)
        .filter(|len| *len <= width)
        .ok_or_else(|| Error::MalformedBlock("length header exceeds block width".into()))?;
    if (tail_len == 0) != chunks.is_empty() {
        return Err(Error::MalformedBlock(
            "length header inconsistent with block count".into(),
        ));
    }

    let mut message = Vec::with_capacity(chunks.len() * width);
    for chunk in chunks {
        let bytes = chunk.to_bytes_be();
        if bytes.len() > width {
            return Err(Error::MalformedBlock(format!(
                "chunk of {} bytes exceeds block width {}",
                bytes.len(),
                width
            )));
        }
        message.resize(message.len() + width - bytes.len(), 0);
        message.extend_from_slice(&bytes);
    }

    // strip the zero padding of the final chunk
    let pad = width - tail_len;
    if !chunks.is_empty() {
        if message[message.len() - pad..].iter().any(|&b| b != 0) {
            return Err(Error::MalformedBlock(
                "non-zero padding in final chunk".into(),
            ));
        }
        message.truncate(message.len() - pad);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modulus_32bit() -> BigUint {
        // 0xC0000001, a 32-bit modulus giving a 3-byte block width
        BigUint::from(0xC000_0001u32)
    }

    #[test]
    fn test_block_width() {
        assert_eq!(block_width(&BigUint::from(256u32)).unwrap(), 1);
        assert_eq!(block_width(&modulus_32bit()).unwrap(), 3);
        let err = block_width(&BigUint::from(255u32)).unwrap_err();
        assert_eq!(err, Error::BlockOverflow { modulus_bits: 8 });
    }

    #[test]
    fn test_roundtrip() {
        let n = modulus_32bit();
        let cases: Vec<Vec<u8>> = vec![
            vec![],
            b"A".to_vec(),
            b"AB".to_vec(),
            b"ABC".to_vec(),
            b"ABCD".to_vec(),
            b"HELLO".to_vec(),
            b"IT'S ALL GREEK TO ME".to_vec(),
            vec![0u8; 10],
            vec![255u8; 10],
            vec![0, 255, 0, 255, 0, 255, 0],
        ];
        for message in cases {
            let blocks = encode(&message, &n).unwrap();
            assert_eq!(decode(&blocks, &n).unwrap(), message, "{:?}", message);
        }
    }

    #[test]
    fn test_block_bound() {
        let n = modulus_32bit();
        let message: Vec<u8> = (0u8..=255).collect();
        for block in encode(&message, &n).unwrap() {
            assert!(block < n);
        }
    }

    #[test]
    fn test_block_count() {
        // width 3: five bytes split into 3 + 2, plus the length header
        let blocks = encode(b"HELLO", &modulus_32bit()).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], BigUint::from(2u8));
    }

    #[test]
    fn test_decode_rejects_oversized_block() {
        let n = modulus_32bit();
        let mut blocks = encode(b"HELLO", &n).unwrap();
        blocks[1] = &n + 1u8;
        assert!(matches!(
            decode(&blocks, &n),
            Err(Error::MalformedBlock(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_header() {
        let n = modulus_32bit();
        let mut blocks = encode(b"HELLO", &n).unwrap();
        blocks[0] = BigUint::from(200u8);
        assert!(matches!(
            decode(&blocks, &n),
            Err(Error::MalformedBlock(_))
        ));

        // header says empty but chunks follow
        blocks[0] = BigUint::from(0u8);
        assert!(matches!(
            decode(&blocks, &n),
            Err(Error::MalformedBlock(_))
        ));
    }

    #[test]
    fn test_decode_rejects_empty_sequence() {
        assert!(matches!(
            decode(&[], &modulus_32bit()),
            Err(Error::MalformedBlock(_))
        ));
    }

    #[test]
    fn test_decode_rejects_nonzero_padding() {
        let n = modulus_32bit();
        let mut blocks = encode(b"ABCD", &n).unwrap();
        // final chunk is 'D' + two pad bytes; corrupt a pad byte
        let last = blocks.last().unwrap() + 1u8;
        *blocks.last_mut().unwrap() = last;
        assert!(matches!(
            decode(&blocks, &n),
            Err(Error::MalformedBlock(_))
        ));
    }
}
