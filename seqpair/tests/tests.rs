#[cfg(test)]
mod tests {
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use seqpair::PlacementError;
    use seqpair::decode;
    use seqpair::entities::{FixedBlock, Problem, Rectangle, SequencePair};
    use seqpair::io::ext_repr::{ExtFixedBlock, ExtProblem, ExtRectangle};
    use seqpair::io::import::{from_json_str, import};
    use seqpair::util::assertions::{bounding_box_is_tight, floorplan_is_valid};

    const N_PAIRS: usize = 50;

    /// Random problem with rectangles between 10 and 50 wide/high, a third of them rotatable
    fn random_problem(n: usize, blocks: Vec<FixedBlock>, rng: &mut SmallRng) -> Problem {
        let rects = (0..n)
            .map(|id| {
                let w = rng.random_range(10..=50) as f32;
                let h = rng.random_range(10..=50) as f32;
                Rectangle::try_new(id, w, h, id % 3 == 0).unwrap()
            })
            .collect();
        Problem::new(rects, blocks).unwrap()
    }

    fn random_pair(n: usize, rng: &mut SmallRng) -> SequencePair {
        let mut sp = SequencePair::random(n, rng);
        sp.rotations.iter_mut().for_each(|r| *r = rng.random_bool(0.5));
        sp
    }

    fn central_block() -> Vec<FixedBlock> {
        vec![FixedBlock::try_new(0, 180.0, 150.0, 80.0, 210.0).unwrap()]
    }

    fn scattered_blocks() -> Vec<FixedBlock> {
        vec![
            FixedBlock::try_new(0, 30.0, 0.0, 0.0, 25.0).unwrap(),
            FixedBlock::try_new(1, 100.0, 60.0, 40.0, 90.0).unwrap(),
            FixedBlock::try_new(2, 15.0, 95.0, -5.0, 140.0).unwrap(),
        ]
    }

    #[test_case(1, vec![]; "single rectangle")]
    #[test_case(10, vec![]; "ten rectangles")]
    #[test_case(10, central_block(); "ten rectangles, central block")]
    #[test_case(25, scattered_blocks(); "25 rectangles, scattered blocks")]
    #[test_case(60, scattered_blocks(); "60 rectangles, scattered blocks")]
    fn decoded_floorplans_are_valid(n: usize, blocks: Vec<FixedBlock>) {
        let mut rng = SmallRng::seed_from_u64(n as u64);
        let problem = random_problem(n, blocks, &mut rng);
        for _ in 0..N_PAIRS {
            let sp = random_pair(n, &mut rng);
            let fp = decode(&problem, &sp).unwrap();
            assert!(floorplan_is_valid(&problem, &fp));
            assert!(bounding_box_is_tight(&fp));
            assert!(fp.area >= problem.total_rect_area());
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(1; "seed 1")]
    #[test_case(42; "seed 42")]
    fn decode_is_deterministic(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let problem = random_problem(20, scattered_blocks(), &mut rng);
        let sp = random_pair(20, &mut rng);
        let first = decode(&problem, &sp).unwrap();
        let second = decode(&problem, &sp.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn three_unit_squares_in_a_strip() {
        let rects = (0..3)
            .map(|id| Rectangle::try_new(id, 1.0, 1.0, false).unwrap())
            .collect();
        let problem = Problem::new(rects, vec![]).unwrap();
        let fp = decode(&problem, &SequencePair::identity(3)).unwrap();
        assert_eq!(fp.area, 3.0);
        assert!(floorplan_is_valid(&problem, &fp));
    }

    #[test]
    fn import_normalizes_heterogeneous_entries() {
        let json = r#"{
            "Components": [[10, 5], [3, 4, true], {"width": 7, "height": 2}, {"width": 1, "height": 9, "rotatable": true}],
            "PreDefinedBlocks": [[180, 150, 210, 80], {"top": 50, "left": 0, "bottom": 40, "right": 10}]
        }"#;
        let ext: ExtProblem = from_json_str(json).unwrap();
        let problem = import(&ext).unwrap();

        assert_eq!(problem.n(), 4);
        assert_eq!(
            problem.rectangles,
            vec![
                Rectangle { id: 0, width: 10.0, height: 5.0, rotatable: false },
                Rectangle { id: 1, width: 3.0, height: 4.0, rotatable: true },
                Rectangle { id: 2, width: 7.0, height: 2.0, rotatable: false },
                Rectangle { id: 3, width: 1.0, height: 9.0, rotatable: true },
            ]
        );
        assert_eq!(
            problem.fixed_blocks,
            vec![
                FixedBlock { id: 0, top: 180.0, left: 150.0, bottom: 80.0, right: 210.0 },
                FixedBlock { id: 1, top: 50.0, left: 0.0, bottom: 40.0, right: 10.0 },
            ]
        );
    }

    #[test_case(r#"{"Components": ["10x5"]}"#; "string entry")]
    #[test_case(r#"{"Components": [{"width": 10}]}"#; "missing height")]
    #[test_case(r#"{"Components": [[10]]}"#; "positional too short")]
    #[test_case(r#"{"Components": [[10, 5, true, 1]]}"#; "positional too long")]
    #[test_case(r#"{"Components": [[-1, 5]]}"#; "negative width")]
    #[test_case(r#"{"Components": [], "PreDefinedBlocks": [{"top": 1, "left": 0}]}"#; "block missing fields")]
    #[test_case(r#"{"Components": [], "PreDefinedBlocks": [[0, 0, 10, 10]]}"#; "block with top below bottom")]
    fn import_rejects_invalid_entries(json: &str) {
        let ext: ExtProblem = from_json_str(json).unwrap();
        assert!(matches!(import(&ext), Err(PlacementError::InvalidInput(_))));
    }

    #[test]
    fn import_rejects_overlapping_fixed_blocks() {
        let ext = ExtProblem {
            rectangles: vec![ExtRectangle::Keyed { width: 10.0, height: 5.0, rotatable: false }],
            fixed_blocks: vec![
                ExtFixedBlock::Keyed { top: 10.0, bottom: 0.0, left: 0.0, right: 5.0 },
                ExtFixedBlock::Keyed { top: 5.0, bottom: -5.0, left: 2.0, right: 8.0 },
            ],
        };
        assert_eq!(
            import(&ext).unwrap_err(),
            PlacementError::OverlappingFixedBlocks { a: 0, b: 1 }
        );
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let res: Result<ExtProblem, _> = from_json_str("{\"Components\": ");
        assert!(matches!(res, Err(PlacementError::InvalidInput(_))));
    }
}
