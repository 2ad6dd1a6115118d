use rand::Rng;

/// Uniform pick over a slice. Empty input is a `None`, never a panic.
pub fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> Option<&'a T> {
	if items.is_empty() {
		return None;
	}

	items.get(rng.gen_range(0..items.len()))
}

#[cfg(test)]
mod tests {
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	#[test]
	fn empty_slice_yields_none() {
		let mut rng = StdRng::seed_from_u64(7);
		let items: [u32; 0] = [];

		assert_eq!(pick(&mut rng, &items), None);
	}

	#[test]
	fn single_item_is_always_picked() {
		let mut rng = StdRng::seed_from_u64(7);

		assert_eq!(pick(&mut rng, &["only"]), Some(&"only"));
	}

	#[test]
	fn picked_item_is_always_a_member() {
		let mut rng = StdRng::seed_from_u64(42);
		let items = ["a", "b", "c", "d"];

		for _ in 0..256 {
			let picked = pick(&mut rng, &items).expect("Non-empty slice must yield a pick.");

			assert!(items.contains(picked));
		}
	}
}
