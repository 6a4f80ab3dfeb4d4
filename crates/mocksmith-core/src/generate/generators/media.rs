//! Media URL generators.

use rand::Rng;

use crate::generate::generators::{owned, random_alphanumeric};
use crate::generate::value::Value;

const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;

pub fn avatar(rng: &mut impl Rng) -> Value {
    let seed = random_alphanumeric(rng, 8);
    owned(format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        seed
    ))
}

pub fn image(width: Option<u32>, height: Option<u32>, rng: &mut impl Rng) -> Value {
    let seed = random_alphanumeric(rng, 8);
    owned(format!(
        "https://picsum.photos/seed/{}/{}/{}",
        seed,
        width.unwrap_or(DEFAULT_WIDTH),
        height.unwrap_or(DEFAULT_HEIGHT)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_image_embeds_dimensions() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = image(Some(800), Some(600), &mut rng);
        assert!(value.as_str().unwrap().ends_with("/800/600"));
    }

    #[test]
    fn test_image_defaults() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = image(None, None, &mut rng);
        assert!(value.as_str().unwrap().ends_with("/640/480"));
    }

    #[test]
    fn test_avatar_is_a_url() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = avatar(&mut rng);
        assert!(value.as_str().unwrap().starts_with("https://"));
    }
}
