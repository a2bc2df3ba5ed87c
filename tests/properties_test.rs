//! Property-based tests for the aggregation engine's algebraic contracts:
//! conservation of totals, partition correctness, determinism, and the
//! top-N bound.

use arkflow::domain::aggregate::{group_by_symbol, summarize, TOP_TRADES_LEN};
use arkflow::domain::fund::Fund;
use arkflow::domain::trade::{Direction, Trade};
use chrono::NaiveDate;
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Buy), Just(Direction::Sell)]
}

fn arb_fund() -> impl Strategy<Value = Fund> {
    prop::sample::select(Fund::ALL.to_vec())
}

fn arb_trade() -> impl Strategy<Value = Trade> {
    (
        "[A-Z]{1,5}",
        arb_direction(),
        // Whole dollars keep f64 sums exact, so conservation can be
        // asserted with equality.
        0u64..100_000_000u64,
        0u32..365u32,
        arb_fund(),
    )
        .prop_map(|(symbol, direction, value, day_offset, fund)| {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            Trade {
                company_name: format!("{symbol} Inc"),
                symbol,
                direction,
                market_value: value as f64,
                date: base + chrono::Duration::days(day_offset as i64),
                fund,
            }
        })
}

fn arb_trades() -> impl Strategy<Value = Vec<Trade>> {
    prop::collection::vec(arb_trade(), 0..40)
}

proptest! {
    #[test]
    fn conservation_of_buy_and_sell_totals(trades in arb_trades()) {
        let summary = summarize(&trades).unwrap();

        let group_buy: f64 = summary.grouped_trades.iter().map(|g| g.total_buy_value).sum();
        let group_sell: f64 = summary.grouped_trades.iter().map(|g| g.total_sell_value).sum();

        prop_assert_eq!(group_buy, summary.total_buy_value);
        prop_assert_eq!(group_sell, summary.total_sell_value);
        prop_assert_eq!(summary.net_flow, summary.total_buy_value - summary.total_sell_value);
    }

    #[test]
    fn partition_covers_every_trade_exactly_once(trades in arb_trades()) {
        let groups = group_by_symbol(&trades).unwrap();

        let grouped_count: usize = groups.iter().map(|g| g.trades.len()).sum();
        prop_assert_eq!(grouped_count, trades.len());

        for group in &groups {
            for trade in &group.trades {
                prop_assert_eq!(&trade.symbol, &group.symbol);
            }
        }
    }

    #[test]
    fn aggregation_is_deterministic(trades in arb_trades()) {
        prop_assert_eq!(summarize(&trades).unwrap(), summarize(&trades).unwrap());
        prop_assert_eq!(group_by_symbol(&trades).unwrap(), group_by_symbol(&trades).unwrap());
    }

    #[test]
    fn top_trades_bound_and_dominance(trades in arb_trades()) {
        let summary = summarize(&trades).unwrap();

        prop_assert_eq!(summary.top_trades.len(), trades.len().min(TOP_TRADES_LEN));

        if let Some(floor) = summary.top_trades.last() {
            for excluded in &summary.trades[summary.top_trades.len()..] {
                prop_assert!(excluded.market_value <= floor.market_value);
            }
        }
    }

    #[test]
    fn group_order_is_by_absolute_net_descending(trades in arb_trades()) {
        let groups = group_by_symbol(&trades).unwrap();
        for pair in groups.windows(2) {
            prop_assert!(pair[0].net_value.abs() >= pair[1].net_value.abs());
        }
    }

    #[test]
    fn summary_trades_sorted_by_value_descending(trades in arb_trades()) {
        let summary = summarize(&trades).unwrap();
        for pair in summary.trades.windows(2) {
            prop_assert!(pair[0].market_value >= pair[1].market_value);
        }
    }

    #[test]
    fn net_sign_matches_single_direction_input(trades in arb_trades()) {
        let buys: Vec<Trade> = trades
            .iter()
            .map(|t| Trade { direction: Direction::Buy, ..t.clone() })
            .collect();
        let summary = summarize(&buys).unwrap();
        prop_assert_eq!(summary.net_flow, summary.total_buy_value);

        let sells: Vec<Trade> = trades
            .iter()
            .map(|t| Trade { direction: Direction::Sell, ..t.clone() })
            .collect();
        let summary = summarize(&sells).unwrap();
        prop_assert_eq!(summary.net_flow, -summary.total_sell_value);
    }
}
