//! Static site content
//!
//! Navigation, feature and tech-stack lists rendered by the layout and the
//! landing page. Order in each list is display order.

use crate::components::Icon;

/// Document metadata and branding.
#[derive(Debug, Clone, Copy)]
pub struct SiteMeta {
    pub brand: &'static str,
    pub brand_mark: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

impl TechEntry {
    /// Letter shown in the tile badge.
    pub fn monogram(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

pub const SITE: SiteMeta = SiteMeta {
    brand: "SaaSTemplate",
    brand_mark: "S",
    title: "AWS SaaS Template - Build Your Next SaaS with AWS & Next.js",
    description: "A production-ready Next.js SaaS starter template with AWS backend infrastructure, \
                  featuring Cognito authentication, API Gateway, DynamoDB, and beautiful UI components.",
};

pub const REPOSITORY_URL: &str = "https://github.com";

pub const LOGIN: NavLink = NavLink { label: "Log in", href: "/login" };
pub const SIGNUP: NavLink = NavLink { label: "Sign up", href: "/signup" };
pub const DOCS: NavLink = NavLink { label: "Docs", href: "/docs" };

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", href: "/features" },
    NavLink { label: "Pricing", href: "/pricing" },
    DOCS,
    NavLink { label: "About", href: "/about" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Shield,
        title: "AWS Cognito Auth",
        description: "Complete authentication with email verification, password reset, and MFA support",
    },
    Feature {
        icon: Icon::Zap,
        title: "API Gateway",
        description: "Secure REST API with Lambda functions, rate limiting, and automatic validation",
    },
    Feature {
        icon: Icon::Cloud,
        title: "DynamoDB",
        description: "Scalable NoSQL database with single-table design and best practices",
    },
    Feature {
        icon: Icon::Code,
        title: "TypeScript CDK",
        description: "Infrastructure as code with AWS CDK for easy deployment and version control",
    },
    Feature {
        icon: Icon::Rocket,
        title: "Amplify Hosting",
        description: "Automatic deployments from GitHub with preview environments and CI/CD",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Beautiful UI",
        description: "Pre-built components with shadcn/ui and Tailwind CSS for rapid development",
    },
];

pub const TECH_STACK: [TechEntry; 8] = [
    TechEntry { name: "Next.js 14", description: "React Framework" },
    TechEntry { name: "TypeScript", description: "Type Safety" },
    TechEntry { name: "Tailwind CSS", description: "Styling" },
    TechEntry { name: "shadcn/ui", description: "Components" },
    TechEntry { name: "AWS Cognito", description: "Authentication" },
    TechEntry { name: "API Gateway", description: "REST API" },
    TechEntry { name: "DynamoDB", description: "Database" },
    TechEntry { name: "AWS CDK", description: "Infrastructure" },
];

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink { label: "Features", href: "/features" },
            NavLink { label: "Pricing", href: "/pricing" },
            DOCS,
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink { label: "About", href: "/about" },
            NavLink { label: "GitHub", href: REPOSITORY_URL },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_list_has_six_entries() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(FEATURES[0].title, "AWS Cognito Auth");
        assert_eq!(FEATURES[5].title, "Beautiful UI");
    }

    #[test]
    fn test_tech_monograms() {
        let monograms: String = TECH_STACK.iter().map(TechEntry::monogram).collect();
        assert_eq!(monograms, "NTTsAADA");
    }

    #[test]
    fn test_nav_links_are_site_relative() {
        for link in NAV_LINKS.iter().chain([&LOGIN, &SIGNUP]) {
            assert!(link.href.starts_with('/'), "{} -> {}", link.label, link.href);
        }
    }
}
