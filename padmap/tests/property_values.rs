use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use padmap::color::Scale;
use padmap::{values, Pad, Vertex};

fn pad(id: u32, corner: (f32, f32)) -> Pad {
    let (x, y) = corner;
    Pad {
        id,
        vertices: vec![
            Vertex { x, y },
            Vertex { x: x + 1.0, y },
            Vertex { x: x + 1.0, y: y + 1.0 },
        ],
        value: 0.0,
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

    #[test]
    fn value_pass_preserves_identity_and_stays_in_domain(
        n in 0usize..64,
        seed in any::<u64>(),
    ) {
        let mut pads: Vec<Pad> = (0..n).map(|i| pad(i as u32, (i as f32, 0.0))).collect();
        let ids: Vec<u32> = pads.iter().map(|p| p.id).collect();

        let mut rng = SmallRng::seed_from_u64(seed);
        values::assign_uniform(&mut pads, &mut rng);

        prop_assert_eq!(pads.len(), n);
        for (p, id) in pads.iter().zip(ids) {
            prop_assert_eq!(p.id, id);
            prop_assert!((0.0..1.0).contains(&p.value));
        }
    }

    #[test]
    fn scale_accepts_the_whole_domain(v in 0.0f32..1.0) {
        let c = Scale.get(v).unwrap();
        let hex = c.hex();
        prop_assert_eq!(hex.len(), 7);
        prop_assert!(hex.starts_with('#'));
    }

    #[test]
    fn scale_rejects_everything_outside(v in prop_oneof![1.0f32..100.0, -100.0f32..-0.001]) {
        prop_assert!(Scale.get(v).is_err());
    }
}
