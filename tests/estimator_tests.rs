// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strategy-selection tests for the estimator, driven end-to-end into the
//! allocator through a recording sink.

mod helpers;

use alloy_chains::NamedChain;
use helpers::{snapshot, stat, teleport, MemorySink};
use telescan::allocator::report_allocation;
use telescan::config::registry::stablecoins;
use telescan::{AdapterConfig, EstimateOutcome, Estimator, Strategy, TokenAmount, UsdValue};

#[test]
fn direct_involvement_beats_proportional_distribution() {
    let snapshot = snapshot(
        vec![stat(42161, 100), stat(1, 900)],
        vec![
            teleport("1", 1_000, 1, 42161),
            teleport("2", 500, 42161, 10),
            teleport("1", 9_999, 1, 10), // does not involve arbitrum
        ],
    );

    let estimator = Estimator::new(AdapterConfig::standard());
    let outcome = estimator.estimate(&snapshot, NamedChain::Arbitrum);

    assert_eq!(
        outcome,
        EstimateOutcome::Estimate {
            value: UsdValue::new(1_500.0),
            strategy: Strategy::DirectInvolvement,
        }
    );
}

#[test]
fn direct_estimate_flows_into_split_allocation() {
    let snapshot = snapshot(vec![], vec![teleport("1", 1_000, 1, 42161)]);
    let estimator = Estimator::new(AdapterConfig::standard());

    let EstimateOutcome::Estimate { value, .. } = estimator.estimate(&snapshot, NamedChain::Arbitrum)
    else {
        panic!("expected a usable estimate");
    };

    let mut sink = MemorySink::new();
    report_allocation(&mut sink, NamedChain::Arbitrum, value, estimator.config());

    assert_eq!(sink.direct_reports.len(), 3);
    let (chain, token, amount) = sink.direct_reports[0];
    assert_eq!(chain, NamedChain::Arbitrum);
    assert_eq!(token, stablecoins::ARB_USDC);
    // 70% of 1000 USD in 6-decimal units
    assert_eq!(amount, TokenAmount::from(700_000_000u64));
}

#[test]
fn below_threshold_sum_uses_proportional_share() {
    // direct involvement is 50, below the standard 100 threshold; volume
    // share is 50% of a 400-unit total teleport value
    let snapshot = snapshot(
        vec![stat(42161, 300), stat(1, 300)],
        vec![
            teleport("1", 50, 1, 42161),
            teleport("1", 350, 1, 10),
        ],
    );

    let estimator = Estimator::new(AdapterConfig::standard());
    let outcome = estimator.estimate(&snapshot, NamedChain::Arbitrum);

    match outcome {
        EstimateOutcome::Estimate { value, strategy } => {
            assert_eq!(strategy, Strategy::ProportionalShare);
            assert!((value.as_f64() - 200.0).abs() < 1e-9);
        }
        other => panic!("expected proportional estimate, got {other:?}"),
    }
}

#[test]
fn below_threshold_without_stats_yields_insufficient_data() {
    let snapshot = snapshot(vec![], vec![teleport("1", 50, 1, 42161)]);
    let estimator = Estimator::new(AdapterConfig::standard());
    assert_eq!(
        estimator.estimate(&snapshot, NamedChain::Arbitrum),
        EstimateOutcome::InsufficientData
    );
}

#[test]
fn unmapped_ids_are_invisible_to_every_sum() {
    let snapshot = snapshot(
        vec![stat(42161, 100), stat(1, 100), stat(777_777, 1_000_000)],
        vec![
            teleport("1", 50, 1, 42161),
            teleport("1", 150, 1, 10),
            teleport("1", 5_000, 777_777, 42161), // unmapped source chain
            teleport("77", 5_000, 1, 42161),      // unknown asset
        ],
    );

    let estimator = Estimator::new(AdapterConfig::standard());
    let outcome = estimator.estimate(&snapshot, NamedChain::Arbitrum);

    // direct sum is only 50, so proportional wins: half of a 200-unit total
    match outcome {
        EstimateOutcome::Estimate { value, strategy } => {
            assert_eq!(strategy, Strategy::ProportionalShare);
            assert!((value.as_f64() - 100.0).abs() < 1e-9);
        }
        other => panic!("expected proportional estimate, got {other:?}"),
    }
}

#[test]
fn empty_snapshot_yields_insufficient_data() {
    let estimator = Estimator::new(AdapterConfig::standard());
    assert_eq!(
        estimator.estimate(&snapshot(vec![], vec![]), NamedChain::Arbitrum),
        EstimateOutcome::InsufficientData
    );
}

#[test]
fn legacy_variant_reports_single_token() {
    let snap = snapshot(vec![], vec![teleport("1", 5, 1, 42161)]);
    let estimator = Estimator::new(AdapterConfig::legacy());

    let EstimateOutcome::Estimate { value, strategy } =
        estimator.estimate(&snap, NamedChain::Arbitrum)
    else {
        panic!("legacy variant must accept any positive direct sum");
    };
    assert_eq!(strategy, Strategy::DirectInvolvement);

    let mut sink = MemorySink::new();
    report_allocation(&mut sink, NamedChain::Arbitrum, value, estimator.config());

    assert_eq!(sink.direct_reports.len(), 1);
    let (_, token, amount) = sink.direct_reports[0];
    assert_eq!(token, stablecoins::ARB_USDC);
    // 100% of 5 USD in 6-decimal units
    assert_eq!(amount, TokenAmount::from(5_000_000u64));
}
