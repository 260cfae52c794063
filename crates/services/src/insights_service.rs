use prep_core::model::{Company, CompanyId, JobOpening};

/// In-memory company directory behind the industry-insights screen.
///
/// Read-only static data: browse, search by name or industry, and fetch
/// the fixed sample openings shown on a company's detail view.
#[derive(Debug, Clone)]
pub struct InsightsService {
    companies: Vec<Company>,
}

impl InsightsService {
    #[must_use]
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// The directory shipped with the product.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data fails validation, which would be a
    /// programming error in this module.
    #[must_use]
    pub fn builtin() -> Self {
        let companies = vec![
            builtin_company(
                "google",
                "Google",
                "🔍",
                "150,000+",
                "Technology",
                &["Mountain View", "New York", "London"],
                1200,
            ),
            builtin_company(
                "amazon",
                "Amazon",
                "📦",
                "1,500,000+",
                "E-commerce & Cloud",
                &["Seattle", "Worldwide"],
                5000,
            ),
            builtin_company(
                "meta",
                "Meta",
                "👤",
                "86,000+",
                "Social Media",
                &["Menlo Park", "Remote"],
                800,
            ),
            builtin_company(
                "microsoft",
                "Microsoft",
                "🪟",
                "220,000+",
                "Technology",
                &["Redmond", "Global"],
                2500,
            ),
            builtin_company(
                "apple",
                "Apple",
                "🍎",
                "164,000+",
                "Consumer Electronics",
                &["Cupertino", "Worldwide"],
                1500,
            ),
            builtin_company(
                "tcs",
                "TCS",
                "💼",
                "600,000+",
                "IT Services",
                &["Mumbai", "Global"],
                3000,
            ),
            builtin_company(
                "infosys",
                "Infosys",
                "ℹ️",
                "340,000+",
                "IT Consulting",
                &["Bangalore", "Worldwide"],
                2000,
            ),
            builtin_company(
                "netflix",
                "Netflix",
                "🎬",
                "12,000+",
                "Entertainment",
                &["Los Gatos", "Remote"],
                150,
            ),
        ];
        Self::new(companies)
    }

    /// All companies in display order.
    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// Look up a company by id.
    #[must_use]
    pub fn company(&self, id: &CompanyId) -> Option<&Company> {
        self.companies.iter().find(|c| c.id() == id)
    }

    /// Case-insensitive substring search over company name and industry.
    /// An empty query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|c| c.matches(query))
            .collect()
    }

    /// Sample positions shown on a company's detail view, anchored to its
    /// primary location.
    #[must_use]
    pub fn sample_openings(&self, company: &Company) -> Vec<JobOpening> {
        let primary = company.primary_location().to_string();
        vec![
            JobOpening {
                title: "Senior Software Engineer".to_string(),
                location: primary.clone(),
                salary_range: "$150k-$200k".to_string(),
            },
            JobOpening {
                title: "Product Manager".to_string(),
                location: primary.clone(),
                salary_range: "$130k-$180k".to_string(),
            },
            JobOpening {
                title: "UX Designer".to_string(),
                location: "Remote".to_string(),
                salary_range: "$120k-$160k".to_string(),
            },
            JobOpening {
                title: "Data Scientist".to_string(),
                location: primary,
                salary_range: "$140k-$190k".to_string(),
            },
        ]
    }
}

fn builtin_company(
    id: &str,
    name: &str,
    logo: &str,
    employees: &str,
    industry: &str,
    locations: &[&str],
    openings: u32,
) -> Company {
    let id = CompanyId::new(id).expect("builtin company id is valid");
    let locations = locations.iter().map(|l| (*l).to_string()).collect();
    Company::new(id, name, logo, employees, industry, locations, openings)
        .expect("builtin company is valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_directory_has_eight_companies() {
        assert_eq!(InsightsService::builtin().companies().len(), 8);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let service = InsightsService::builtin();
        let hits = service.search("NETFLIX");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Netflix");
    }

    #[test]
    fn search_matches_industry() {
        let service = InsightsService::builtin();
        let hits = service.search("technology");
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn empty_query_returns_everything() {
        let service = InsightsService::builtin();
        assert_eq!(service.search("").len(), 8);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let service = InsightsService::builtin();
        assert!(service.search("aerospace").is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let service = InsightsService::builtin();
        let id = CompanyId::new("meta").unwrap();
        assert_eq!(service.company(&id).unwrap().name(), "Meta");
        assert!(service.company(&CompanyId::new("missing").unwrap()).is_none());
    }

    #[test]
    fn sample_openings_anchor_to_primary_location() {
        let service = InsightsService::builtin();
        let google = service.company(&CompanyId::new("google").unwrap()).unwrap();
        let openings = service.sample_openings(google);

        assert_eq!(openings.len(), 4);
        assert_eq!(openings[0].location, "Mountain View");
        assert_eq!(openings[2].location, "Remote");
    }
}
