use chrono::Utc;
use once_cell::sync::Lazy;

use crate::models::Dataset;

// createdAt is stamped once per cold start.
static DATASETS: Lazy<Vec<Dataset>> = Lazy::new(|| {
    let created_at = Utc::now();
    vec![
        Dataset {
            id: "defi-tvl-analytics",
            title: "DeFi TVL Analytics",
            description: "Real-time Total Value Locked data across 150+ protocols. Includes Ethereum ($84.1B), Solana ($9.9B), and emerging chains with comprehensive protocol analytics.",
            source: "https://defillama.com/api",
            tags: &["defi", "tvl", "defillama", "protocols"],
            update_frequency: "hourly",
            volume: "150+ protocols",
            category: "DeFi",
            status: "live",
            created_at,
        },
        Dataset {
            id: "nft-trading-data",
            title: "NFT Trading Data",
            description: "Comprehensive NFT marketplace data with $946M monthly volume. Ethereum dominance at 78.5% with emerging Polygon growth and 9.2M monthly sales.",
            source: "https://dappradar.com/nft",
            tags: &["nft", "trading", "opensea", "polygon"],
            update_frequency: "daily",
            volume: "9.2M sales/month",
            category: "NFT",
            status: "live",
            created_at,
        },
        Dataset {
            id: "dao-ecosystem",
            title: "DAO Ecosystem Analytics",
            description: "Track 13,000+ DAOs with $40B+ combined treasury value. Governance activity across major protocols and communities with 11M token holders globally.",
            source: "https://www.alchemy.com/dapps/top/daos",
            tags: &["dao", "governance", "treasury", "tokens"],
            update_frequency: "weekly",
            volume: "11M token holders",
            category: "DAO",
            status: "live",
            created_at,
        },
        Dataset {
            id: "bitcoin-blockchain",
            title: "Bitcoin Blockchain Historical Data",
            description: "Complete historical Bitcoin blockchain data from Kaggle BigQuery. Includes blocks, transactions, and address analytics for comprehensive Bitcoin network analysis.",
            source: "https://www.kaggle.com/datasets/bigquery/bitcoin-blockchain",
            tags: &["bitcoin", "blockchain", "kaggle", "historical"],
            update_frequency: "quarterly",
            volume: "Full blockchain",
            category: "Blockchain",
            status: "historical",
            created_at,
        },
        Dataset {
            id: "ethereum-defi-protocols",
            title: "Ethereum DeFi Protocols",
            description: "Ethereum ecosystem with 59.7% DeFi market share. Includes Uniswap, Aave, and Lido Finance protocol data with $84.1B total value locked.",
            source: "https://defillama.com/chain/Ethereum",
            tags: &["ethereum", "defi", "uniswap", "aave"],
            update_frequency: "hourly",
            volume: "$84.1B TVL",
            category: "DeFi",
            status: "live",
            created_at,
        },
    ]
});

pub fn all() -> &'static [Dataset] {
    &DATASETS
}
