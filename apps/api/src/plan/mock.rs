//! Canned project plans served when no API key is configured, so the
//! frontend can be exercised offline.

use crate::models::project::{Milestone, ProjectPlan};

fn milestone(title: &str, description: &str) -> Milestone {
    Milestone {
        title: title.to_string(),
        description: description.to_string(),
        complete: false,
        reflection: None,
    }
}

fn voting_app() -> ProjectPlan {
    ProjectPlan {
        title: "Decentralized Voting App".into(),
        description: "A blockchain-based voting system using smart contracts".into(),
        milestones: vec![
            milestone(
                "Research what a smart contract is",
                "Learn the fundamentals of smart contracts and how they work on Ethereum",
            ),
            milestone(
                "Write a basic smart contract in Solidity",
                "Create your first smart contract using Solidity programming language",
            ),
            milestone(
                "Deploy contract using Remix",
                "Use Remix IDE to compile and deploy your contract to testnet",
            ),
            milestone(
                "Build frontend with Web3.js",
                "Create a React frontend that interacts with your smart contract",
            ),
            milestone(
                "Connect frontend to contract",
                "Integrate MetaMask and enable full DApp functionality",
            ),
            milestone(
                "Write README + LinkedIn post",
                "Document your project and create a professional showcase post",
            ),
        ],
        learning_goals: vec![
            "Master Smart Contract Development".into(),
            "Understand Decentralized Governance".into(),
            "Learn Voting Mechanisms".into(),
            "Build Real-World DApp".into(),
        ],
        skills_to_master: vec![
            "Solidity".into(),
            "Web3.js".into(),
            "React".into(),
            "Ethereum".into(),
            "MetaMask".into(),
        ],
    }
}

fn nft_marketplace() -> ProjectPlan {
    ProjectPlan {
        title: "NFT Marketplace".into(),
        description: "A decentralized marketplace for buying and selling NFTs".into(),
        milestones: vec![
            milestone(
                "Learn NFT basics",
                "Understand what NFTs are and how they work on blockchain",
            ),
            milestone(
                "Create NFT smart contract",
                "Build a Solidity contract for minting and managing NFTs",
            ),
            milestone(
                "Add marketplace functionality",
                "Implement buying, selling, and bidding features",
            ),
            milestone(
                "Build React frontend",
                "Create a user-friendly interface for the marketplace",
            ),
            milestone(
                "Integrate IPFS storage",
                "Store NFT metadata on decentralized storage",
            ),
            milestone(
                "Deploy and document",
                "Deploy to testnet and create portfolio documentation",
            ),
        ],
        learning_goals: vec![
            "Master NFT Standards".into(),
            "Learn Marketplace Economics".into(),
            "Understand Digital Ownership".into(),
            "Build Real-World DApp".into(),
        ],
        skills_to_master: vec![
            "Solidity".into(),
            "IPFS".into(),
            "React".into(),
            "Ethereum".into(),
            "NFT".into(),
        ],
    }
}

fn yield_farming() -> ProjectPlan {
    ProjectPlan {
        title: "DeFi Yield Farming App".into(),
        description: "A decentralized finance application for yield farming".into(),
        milestones: vec![
            milestone(
                "Understand DeFi concepts",
                "Learn about liquidity pools, yield farming, and AMMs",
            ),
            milestone(
                "Create token contracts",
                "Build ERC-20 tokens for the farming protocol",
            ),
            milestone(
                "Implement staking mechanism",
                "Create smart contracts for staking and rewards",
            ),
            milestone(
                "Build user interface",
                "Create a React app for interacting with the protocol",
            ),
            milestone(
                "Add liquidity features",
                "Implement adding and removing liquidity functionality",
            ),
            milestone(
                "Test and deploy",
                "Comprehensive testing and deployment to testnet",
            ),
        ],
        learning_goals: vec![
            "Understand DeFi Protocols".into(),
            "Learn Yield Farming".into(),
            "Master Liquidity Concepts".into(),
            "Build Real-World DApp".into(),
        ],
        skills_to_master: vec![
            "Solidity".into(),
            "DeFi".into(),
            "Web3.js".into(),
            "Ethereum".into(),
            "React".into(),
        ],
    }
}

/// Picks one of the stock plans from a seed (callers pass the current time in
/// millis; tests pass fixed values).
pub fn pick(seed: u64) -> ProjectPlan {
    let plans = [voting_app, nft_marketplace, yield_farming];
    plans[(seed % plans.len() as u64) as usize]()
}
