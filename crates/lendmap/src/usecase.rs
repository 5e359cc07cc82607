//! The built-in LendLink use-case dataset.
//!
//! Labels and coordinates are the product flowchart as authored: ten boxes on
//! a 10x10 grid and nine arrows tracing the deposit, borrow, bridge, and
//! repayment flow. "LendLink" and "LendLink Prime" appear here purely as
//! label text.

use crate::{diagram::Diagram, geometry::Point};

/// Title rendered above the flowchart.
pub const TITLE: &str = "LendLink + LendLink Prime: Full Use Case Diagram";

const NODES: &[(&str, f32, f32)] = &[
    ("User", 1.0, 9.0),
    ("Deposit LST\n(stETH, rETH)", 1.0, 7.5),
    ("LendLink\n(Etherlink)", 4.0, 7.5),
    ("Borrow USDC\n(Stablecoin)", 7.0, 7.5),
    ("Auto-Repay\nvia Staking Yield", 4.0, 5.5),
    ("Cross-Chain Bridge\n(1inch Fusion+)", 4.0, 4.0),
    ("Borrow on Cosmos/\nNear/Aptos", 7.0, 4.0),
    ("Repay from Cosmos/\nNear/Aptos", 7.0, 2.5),
    ("LendLink Prime\n(Cross-Chain Layer)", 4.0, 2.5),
    ("Final Repayment", 4.0, 1.0),
];

const EDGES: &[(&str, &str)] = &[
    ("User", "Deposit LST\n(stETH, rETH)"),
    ("Deposit LST\n(stETH, rETH)", "LendLink\n(Etherlink)"),
    ("LendLink\n(Etherlink)", "Borrow USDC\n(Stablecoin)"),
    ("LendLink\n(Etherlink)", "Auto-Repay\nvia Staking Yield"),
    ("LendLink\n(Etherlink)", "Cross-Chain Bridge\n(1inch Fusion+)"),
    ("Cross-Chain Bridge\n(1inch Fusion+)", "Borrow on Cosmos/\nNear/Aptos"),
    ("Borrow on Cosmos/\nNear/Aptos", "Repay from Cosmos/\nNear/Aptos"),
    ("Repay from Cosmos/\nNear/Aptos", "LendLink Prime\n(Cross-Chain Layer)"),
    ("LendLink Prime\n(Cross-Chain Layer)", "Final Repayment"),
];

/// Builds the full use-case [`Diagram`].
pub fn lendlink_diagram() -> Diagram {
    let mut diagram = Diagram::new(TITLE);

    for (label, x, y) in NODES {
        diagram
            .insert_node(*label, Point::new(*x, *y))
            .expect("use-case node labels are unique");
    }
    for (source, target) in EDGES {
        diagram.push_edge(*source, *target);
    }

    diagram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let diagram = lendlink_diagram();
        assert_eq!(diagram.node_count(), 10);
        assert_eq!(diagram.edges().len(), 9);
        assert_eq!(diagram.title(), TITLE);
    }

    #[test]
    fn test_every_edge_resolves() {
        assert!(lendlink_diagram().validate().is_ok());
    }

    #[test]
    fn test_flow_starts_at_the_user() {
        let diagram = lendlink_diagram();
        let first = &diagram.edges()[0];
        assert_eq!(first.source(), "User");

        let last = diagram.edges().last().unwrap();
        assert_eq!(last.target(), "Final Repayment");
    }
}
