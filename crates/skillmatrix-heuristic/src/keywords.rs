//! Keyword tables for skill detection

use skillmatrix_domain::SkillCategory;

/// Per-category keyword tables.
///
/// Matching preserves table order, so the order here is the order skills
/// appear in the produced record. `other` has no table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTables {
    /// Frontend keywords
    pub frontend: &'static [&'static str],
    /// Backend keywords
    pub backend: &'static [&'static str],
    /// DevOps keywords
    pub devops: &'static [&'static str],
    /// Web3 keywords
    pub web3: &'static [&'static str],
}

impl KeywordTables {
    /// Keywords for one category; `other` is always empty
    pub fn get(&self, category: SkillCategory) -> &'static [&'static str] {
        match category {
            SkillCategory::Frontend => self.frontend,
            SkillCategory::Backend => self.backend,
            SkillCategory::Devops => self.devops,
            SkillCategory::Web3 => self.web3,
            SkillCategory::Other => &[],
        }
    }
}

/// Built-in English keyword tables
pub const DEFAULT_KEYWORDS: KeywordTables = KeywordTables {
    frontend: &[
        "react",
        "vue",
        "angular",
        "svelte",
        "next.js",
        "nextjs",
        "typescript",
        "javascript",
        "html",
        "css",
        "tailwind",
        "sass",
        "webpack",
        "vite",
        "redux",
        "mobx",
        "jest",
        "testing-library",
        "cypress",
    ],
    backend: &[
        "node.js",
        "nodejs",
        "python",
        "django",
        "flask",
        "fastapi",
        "java",
        "spring",
        "kotlin",
        "go",
        "golang",
        "rust",
        "ruby",
        "rails",
        "php",
        "laravel",
        "c#",
        ".net",
        "express",
        "nestjs",
        "graphql",
        "rest",
        "api",
    ],
    devops: &[
        "docker",
        "kubernetes",
        "k8s",
        "aws",
        "azure",
        "gcp",
        "terraform",
        "ansible",
        "jenkins",
        "gitlab",
        "github actions",
        "ci/cd",
        "nginx",
        "prometheus",
        "grafana",
        "elk",
        "linux",
        "bash",
    ],
    web3: &[
        "solidity",
        "ethereum",
        "evm",
        "smart contract",
        "blockchain",
        "web3",
        "wagmi",
        "viem",
        "ethers",
        "hardhat",
        "truffle",
        "merkle",
        "staking",
        "defi",
        "nft",
        "metamask",
        "wallet",
        "dapp",
    ],
};
