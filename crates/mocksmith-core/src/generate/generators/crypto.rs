//! Crypto address and transaction-hash generators.
//!
//! Three chains are supported. When an explicit `min`/`max` length is given
//! it overrides the platform format and a plain random-length hex string is
//! produced instead.

use rand::Rng;

use crate::generate::generators::{owned, random_hex};
use crate::generate::value::Value;
use crate::schema::field::CryptoPlatform;

const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const DEFAULT_HEX_MIN: usize = 32;
const DEFAULT_HEX_MAX: usize = 64;

pub fn address(
    platform: Option<CryptoPlatform>,
    min: Option<usize>,
    max: Option<usize>,
    rng: &mut impl Rng,
) -> Value {
    if min.is_some() || max.is_some() {
        return explicit_hex(min, max, rng);
    }
    match resolve(platform, rng) {
        CryptoPlatform::Bitcoin => {
            let prefix = if rng.random_bool(0.5) { '1' } else { '3' };
            let len = rng.random_range(26..=35usize);
            owned(format!("{}{}", prefix, base58(rng, len - 1)))
        }
        CryptoPlatform::Ethereum => owned(format!("0x{}", random_hex(rng, 40))),
        CryptoPlatform::Litecoin => {
            let prefix = if rng.random_bool(0.5) { 'L' } else { 'M' };
            let len = rng.random_range(26..=36usize);
            owned(format!("{}{}", prefix, base58(rng, len - 1)))
        }
    }
}

pub fn hash(
    platform: Option<CryptoPlatform>,
    min: Option<usize>,
    max: Option<usize>,
    rng: &mut impl Rng,
) -> Value {
    if min.is_some() || max.is_some() {
        return explicit_hex(min, max, rng);
    }
    match resolve(platform, rng) {
        CryptoPlatform::Ethereum => owned(format!("0x{}", random_hex(rng, 64))),
        CryptoPlatform::Bitcoin | CryptoPlatform::Litecoin => owned(random_hex(rng, 64)),
    }
}

fn explicit_hex(min: Option<usize>, max: Option<usize>, rng: &mut impl Rng) -> Value {
    let hi = max.unwrap_or(DEFAULT_HEX_MAX.max(min.unwrap_or(0)));
    let lo = min.unwrap_or(DEFAULT_HEX_MIN.min(hi));
    let len = rng.random_range(lo..=hi);
    owned(random_hex(rng, len))
}

fn resolve(platform: Option<CryptoPlatform>, rng: &mut impl Rng) -> CryptoPlatform {
    match platform {
        Some(platform) => platform,
        None => match rng.random_range(0..3u8) {
            0 => CryptoPlatform::Bitcoin,
            1 => CryptoPlatform::Ethereum,
            _ => CryptoPlatform::Litecoin,
        },
    }
}

fn base58(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| BASE58[rng.random_range(0..BASE58.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn is_base58(s: &str) -> bool {
        s.bytes().all(|b| BASE58.contains(&b))
    }

    #[test]
    fn test_bitcoin_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = address(Some(CryptoPlatform::Bitcoin), None, None, &mut rng);
            let addr = value.as_str().unwrap();
            assert!(addr.starts_with('1') || addr.starts_with('3'), "{}", addr);
            assert!((26..=35).contains(&addr.len()), "{}", addr);
            assert!(is_base58(&addr[1..]), "{}", addr);
        }
    }

    #[test]
    fn test_ethereum_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = address(Some(CryptoPlatform::Ethereum), None, None, &mut rng);
        let addr = value.as_str().unwrap();
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 42);
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_litecoin_address_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = address(Some(CryptoPlatform::Litecoin), None, None, &mut rng);
            let addr = value.as_str().unwrap();
            assert!(addr.starts_with('L') || addr.starts_with('M'), "{}", addr);
            assert!((26..=36).contains(&addr.len()), "{}", addr);
        }
    }

    #[test]
    fn test_explicit_length_overrides_platform() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let value = address(Some(CryptoPlatform::Ethereum), Some(10), Some(12), &mut rng);
            let addr = value.as_str().unwrap();
            assert!((10..=12).contains(&addr.len()), "{}", addr);
            assert!(addr.chars().all(|c| c.is_ascii_hexdigit()), "{}", addr);
        }
    }

    #[test]
    fn test_hash_lengths_per_platform() {
        let mut rng = StdRng::seed_from_u64(42);
        let btc = hash(Some(CryptoPlatform::Bitcoin), None, None, &mut rng);
        assert_eq!(btc.as_str().unwrap().len(), 64);

        let eth = hash(Some(CryptoPlatform::Ethereum), None, None, &mut rng);
        let eth = eth.as_str().unwrap();
        assert!(eth.starts_with("0x"));
        assert_eq!(eth.len(), 66);
    }

    #[test]
    fn test_unset_platform_still_produces_a_value() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = address(None, None, None, &mut rng);
            assert!(!value.as_str().unwrap().is_empty());
        }
    }
}
