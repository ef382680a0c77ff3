//! Simulation Scenario Tests
//!
//! End-to-end traces through the public API, with fault counts and final
//! frames for every policy worked out by hand.

use pagesim::{
    compare, compare_str, simulate, simulate_str, Error, PageId, PolicyKind, ReferenceString,
    SimConfig,
};

fn trace(ids: &[i64]) -> ReferenceString {
    ids.iter().copied().collect()
}

fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

/// (policy, faults, final frames)
fn assert_rows(input: &[i64], n_frames: usize, expected: &[(PolicyKind, u64, &[i64])]) {
    let rows = compare(&trace(input), SimConfig::new(n_frames).unwrap());
    assert_eq!(rows.len(), expected.len());

    for (row, &(kind, faults, frames)) in rows.iter().zip(expected) {
        assert_eq!(row.policy, kind);
        assert_eq!(row.faults, faults, "{} fault count", kind);
        assert_eq!(row.final_frames, pages(frames), "{} final frames", kind);
    }
}

// ============================================================================
// Scenario A: optimality bound
// ============================================================================

#[test]
fn test_scenario_a_all_policies() {
    assert_rows(
        &[1, 2, 3, 4, 1, 2, 5],
        3,
        &[
            (PolicyKind::Fifo, 7, &[1, 2, 5]),
            (PolicyKind::Lru, 7, &[1, 2, 5]),
            (PolicyKind::Optimal, 5, &[5, 2, 4]),
            (PolicyKind::SecondChance, 7, &[5, 1, 2]),
            (PolicyKind::Lfu, 6, &[1, 2, 5]),
            (PolicyKind::Mfu, 6, &[5, 2, 3]),
        ],
    );
}

#[test]
fn test_scenario_a_optimal_steps() {
    let result = simulate(PolicyKind::Optimal, &trace(&[1, 2, 3, 4, 1, 2, 5]), 3).unwrap();

    let faults: Vec<bool> = result.steps.iter().map(|s| s.is_fault()).collect();
    assert_eq!(faults, vec![true, true, true, true, false, false, true]);
    assert_eq!(result.steps[3].evicted(), Some(PageId(3)));
    assert_eq!(result.steps[6].evicted(), Some(PageId(1)));
}

#[test]
fn test_scenario_a_fifo_and_lru_never_hit() {
    for kind in [PolicyKind::Fifo, PolicyKind::Lru] {
        let result = simulate(kind, &trace(&[1, 2, 3, 4, 1, 2, 5]), 3).unwrap();
        assert_eq!(result.stats.hits, 0);
        assert_eq!(result.hit_ratio(), 0.0);
    }
}

// ============================================================================
// Classic textbook trace
// ============================================================================

#[test]
fn test_textbook_trace() {
    assert_rows(
        &[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1],
        3,
        &[
            (PolicyKind::Fifo, 15, &[7, 0, 1]),
            (PolicyKind::Lru, 12, &[1, 0, 7]),
            (PolicyKind::Optimal, 9, &[7, 0, 1]),
            (PolicyKind::SecondChance, 14, &[0, 7, 1]),
            (PolicyKind::Lfu, 13, &[2, 0, 1]),
            (PolicyKind::Mfu, 13, &[7, 0, 1]),
        ],
    );
}

#[test]
fn test_textbook_trace_hit_ratio() {
    let input = "7,0,1,2,0,3,0,4,2,3,0,3,2,1,2,0,1,7,0,1";
    let result = simulate_str(PolicyKind::Optimal, input, 3).unwrap();

    assert_eq!(result.total_accesses(), 20);
    assert_eq!(result.hit_ratio(), 0.55);
    assert!((result.hit_ratio_percent() - 55.0).abs() < 1e-9);
}

// ============================================================================
// Belady's anomaly: FIFO gets worse with more frames
// ============================================================================

#[test]
fn test_belady_anomaly() {
    let input = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    assert_rows(
        &input,
        3,
        &[
            (PolicyKind::Fifo, 9, &[5, 3, 4]),
            (PolicyKind::Lru, 10, &[3, 4, 5]),
            (PolicyKind::Optimal, 7, &[4, 2, 5]),
            (PolicyKind::SecondChance, 9, &[5, 3, 4]),
            (PolicyKind::Lfu, 9, &[1, 2, 5]),
            (PolicyKind::Mfu, 9, &[5, 4, 3]),
        ],
    );
    assert_rows(
        &input,
        4,
        &[
            (PolicyKind::Fifo, 10, &[2, 3, 4, 5]),
            (PolicyKind::Lru, 8, &[2, 3, 4, 5]),
            (PolicyKind::Optimal, 6, &[4, 2, 3, 5]),
            (PolicyKind::SecondChance, 10, &[4, 5, 2, 3]),
            (PolicyKind::Lfu, 7, &[1, 2, 5, 4]),
            (PolicyKind::Mfu, 7, &[5, 2, 3, 4]),
        ],
    );
}

// ============================================================================
// Scenario B: empty trace
// ============================================================================

#[test]
fn test_scenario_b_empty_trace() {
    for n_frames in [1, 3, 10] {
        let rows = compare_str("", n_frames).unwrap();
        assert_eq!(rows.len(), 6);

        for row in rows {
            assert_eq!(row.faults, 0);
            assert_eq!(row.hit_ratio, 0.0);
            assert!(row.final_frames.is_empty());
            assert_eq!(row.final_frames_text(), "[]");
        }
    }
}

// ============================================================================
// Scenarios C and D: validation happens before simulation
// ============================================================================

#[test]
fn test_scenario_c_malformed_input() {
    for kind in PolicyKind::ALL {
        match simulate_str(kind, "1,two,3", 3) {
            Err(Error::InvalidInput { index, token, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(token, "two");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
    assert!(matches!(
        compare_str("1,two,3", 3),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn test_scenario_d_zero_frames() {
    for input in ["", "1,2,3", "1,two,3"] {
        assert_eq!(
            compare_str(input, 0),
            Err(Error::InvalidConfig { n_frames: 0 })
        );
        for kind in PolicyKind::ALL {
            assert!(matches!(
                simulate_str(kind, input, 0),
                Err(Error::InvalidConfig { n_frames: 0 })
            ));
        }
    }
}

// ============================================================================
// Step history
// ============================================================================

#[test]
fn test_step_log_lines() {
    let result = simulate_str(PolicyKind::Fifo, "1, 2, 1, 3", 2).unwrap();
    let lines: Vec<String> = result.steps.iter().map(|s| s.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "Step 1: Page 1 -> Frames: [1] (Page Fault)",
            "Step 2: Page 2 -> Frames: [1, 2] (Page Fault)",
            "Step 3: Page 1 -> Frames: [1, 2] (Page Hit)",
            "Step 4: Page 3 -> Frames: [2, 3] (Page Fault)",
        ]
    );
}

#[test]
fn test_frames_never_exceed_capacity() {
    let input = trace(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4]);

    for kind in PolicyKind::ALL {
        for n_frames in 1..=5 {
            let result = simulate(kind, &input, n_frames).unwrap();
            for step in &result.steps {
                assert!(step.frames.len() <= n_frames);
                assert!(step.frames.contains(&step.page));

                let mut sorted = step.frames.iter().map(|p| p.0).collect::<Vec<_>>();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), step.frames.len(), "{} duplicated a page", kind);
            }
        }
    }
}
