//! Built-in scholarship catalog served until a remote sync succeeds.
//! Entries were verified against the published program pages; criteria
//! prose is kept close to the source since the scoring engine pattern
//! matches against it.

use super::domain::{ScholarshipId, ScholarshipRecord};

/// Date the built-in table was last reviewed.
pub const BUILTIN_REVISION: &str = "2026-02-11";

fn entry(
    id: &str,
    name: &str,
    criteria: &str,
    link: &str,
    deadline: &str,
    amount: &str,
    need_based: bool,
) -> ScholarshipRecord {
    ScholarshipRecord {
        id: ScholarshipId(id.to_string()),
        name: name.to_string(),
        criteria: criteria.to_string(),
        link: link.to_string(),
        deadline: deadline.to_string(),
        amount: amount.to_string(),
        need_based,
    }
}

pub fn builtin_catalog() -> Vec<ScholarshipRecord> {
    vec![
        entry(
            "a91bc024",
            "Gates Scholarship",
            "High school seniors from minority backgrounds (African American, Hispanic, Asian/Pacific Islander, Native American). Pell-eligible. Must demonstrate leadership and academic excellence. 3.3+ GPA on 4.0 scale. U.S. citizen, national, or permanent resident.",
            "https://www.thegatesscholarship.org/",
            "2026-09-15",
            "Full Tuition",
            true,
        ),
        entry(
            "c7f3e011",
            "Ron Brown Scholar Program",
            "African American high school seniors. Must demonstrate academic excellence, leadership, and community service. U.S. citizen or permanent resident. Financial need considered.",
            "https://ronbrown.org/ron-brown-scholarship/",
            "2026-12-01",
            "$40,000",
            true,
        ),
        entry(
            "e8a2d445",
            "Coca-Cola Scholars Foundation",
            "High school seniors with leadership in school and community. U.S. citizens, nationals, permanent residents, refugees, or asylees. Must be eligible for federal financial aid. Achievement-based.",
            "https://www.coca-colascholarsfoundation.org/apply/",
            "2026-09-30",
            "$20,000",
            false,
        ),
        entry(
            "f12b9923",
            "Dell Scholars Program",
            "Must participate in an approved college readiness program. Demonstrate need for financial assistance. GPA of 2.4+. U.S. citizen or permanent resident. Must be a current high school senior.",
            "https://www.dellscholars.org/",
            "2026-12-01",
            "$20,000",
            true,
        ),
        entry(
            "b34cd881",
            "QuestBridge National College Match",
            "High-achieving low-income students. Typically household income under $65,000. Strong academics. High school seniors applying to partner colleges.",
            "https://www.questbridge.org/",
            "2026-09-26",
            "Full Ride",
            true,
        ),
        entry(
            "19afe723",
            "Elks Most Valuable Student Scholarship",
            "U.S. citizen high school senior. Judged on scholarship, leadership, financial need. Must plan to pursue a four-year degree.",
            "https://www.elks.org/scholars/scholarships/mvs.cfm",
            "2026-11-05",
            "$12,500",
            true,
        ),
        entry(
            "20bcd561",
            "Burger King Scholars Program",
            "High school seniors in U.S., Canada, Puerto Rico, or Guam. GPA 2.0+. Demonstrate financial need, work experience, community involvement. Awards range $1,000 to $60,000.",
            "https://burgerking.scholarsapply.org/",
            "2026-12-15",
            "$1,000-$60,000",
            true,
        ),
        entry(
            "31def892",
            "Cameron Impact Scholarship",
            "High school seniors. Demonstrated academic achievement, community involvement, and leadership. U.S. citizens. Plan to attend four-year institution.",
            "https://www.bryancameroneducationfoundation.org/",
            "2026-09-14",
            "Full Tuition",
            false,
        ),
        entry(
            "42eaf123",
            "Daniels Fund Scholarship",
            "Graduating high school seniors from CO, NM, UT, WY. Demonstrate strength of character, leadership, community service. Financial need.",
            "https://www.danielsfund.org/scholarships",
            "2026-11-15",
            "Full Tuition",
            true,
        ),
        entry(
            "53fba234",
            "UNCF Scholarships",
            "Underrepresented minority students. Multiple scholarship programs available year-round. Must attend an HBCU or other accredited institution.",
            "https://uncf.org/scholarships",
            "Varies",
            "Varies",
            true,
        ),
        entry(
            "64acb345",
            "Hispanic Scholarship Fund",
            "Of Hispanic heritage. U.S. citizen, permanent resident, or DACA eligible. Minimum 3.0 GPA. Plan to enroll full-time in accredited institution.",
            "https://www.hsf.net/scholarship",
            "2026-02-15",
            "$500-$5,000",
            false,
        ),
        entry(
            "75bdc456",
            "Asian & Pacific Islander American Scholarship (APIASF)",
            "Asian American or Pacific Islander ethnicity. 2.7+ GPA. U.S. citizen, national, permanent resident, or citizen of Freely Associated States. Financial need.",
            "https://apiascholars.org/",
            "2026-01-11",
            "Up to $20,000",
            true,
        ),
        entry(
            "eq01ex25",
            "Equitable Excellence Scholarship",
            "High school senior. U.S. citizen or legal resident in 50 states, D.C., or Puerto Rico. 2.5+ GPA. Demonstrate leadership, determination, and resilience. Formerly AXA Achievement Scholarship.",
            "https://equitable.com/foundation/equitable-excellence-scholarship",
            "2026-12-18",
            "$5,000/yr renewable",
            false,
        ),
        entry(
            "97dfe678",
            "Horatio Alger Scholarship",
            "High school senior. Demonstrated financial need (family income under $55,000). Minimum 2.0 GPA. Involvement in co-curricular and community activities. U.S. citizen.",
            "https://scholars.horatioalger.org/",
            "2026-10-25",
            "$25,000",
            true,
        ),
        entry(
            "a8ef7789",
            "Jack Kent Cooke Foundation College Scholarship",
            "High school senior with financial need (family income under $95,000). 3.5+ unweighted GPA. Standardized test scores. U.S. citizen or permanent resident.",
            "https://www.jkcf.org/our-scholarships/",
            "2026-11-18",
            "Up to $55,000/yr",
            true,
        ),
        entry(
            "b9f0889a",
            "Posse Foundation Scholarship",
            "Must be nominated by high school. Urban public high school students with extraordinary leadership potential. Full tuition at partner colleges.",
            "https://www.possefoundation.org/",
            "Nomination Only",
            "Full Tuition",
            false,
        ),
        entry(
            "ca01999b",
            "Regeneron Science Talent Search",
            "High school seniors in the U.S. Must submit original research project in science, math, or engineering. Prestigious STEM competition.",
            "https://www.societyforscience.org/regeneron-sts/",
            "2026-11-12",
            "Up to $250,000",
            false,
        ),
        entry(
            "db12aa0c",
            "National Merit Scholarship",
            "U.S. high school students. Based on PSAT/NMSQT scores taken in junior year. Must be enrolled or plan to enroll full-time in college.",
            "https://www.nationalmerit.org/",
            "2026-10-01",
            "$2,500+",
            false,
        ),
        entry(
            "ec23bb1d",
            "Cobell Scholarship (Native American)",
            "Must be enrolled member of a federally recognized tribe. Undergraduate or graduate student. Financial need demonstrated.",
            "https://cobellscholar.org/",
            "2026-01-31",
            "Up to $5,000",
            true,
        ),
        entry(
            "fd34cc2e",
            "NAACP Scholarships",
            "African American students. Must be current NAACP member. Varies by specific scholarship program. Academic merit and financial need considered.",
            "https://naacp.org/find-resources/scholarships",
            "Varies",
            "Varies",
            true,
        ),
        entry(
            "0e45dd3f",
            "Dream.US Scholarship (DREAMers)",
            "DACA or TPS recipients. First-time college students or community college transfers. Financial need. 2.5+ GPA. Must attend a partner college.",
            "https://www.thedream.us/",
            "2026-02-28",
            "Up to $33,000",
            true,
        ),
        entry(
            "1f56ee40",
            "GE-Reagan Foundation Scholarship",
            "High school senior. U.S. citizen. Demonstrate leadership, drive, integrity, and citizenship. 3.0+ GPA. $20,000 renewable scholarship.",
            "https://www.reaganfoundation.org/education/scholarship-programs/",
            "2026-01-05",
            "$10,000/yr renewable",
            false,
        ),
        entry(
            "3b780062",
            "Amazon Future Engineer Scholarship",
            "High school senior planning to study computer science. Financial need. Participation in STEM activities. Includes paid internship at Amazon.",
            "https://www.amazonfutureengineer.com/scholarships",
            "2026-01-20",
            "$40,000",
            true,
        ),
        entry(
            "4c890173",
            "Buick Achievers Scholarship",
            "High school senior or current undergraduate. Plan to major in a STEM field. Demonstrate financial need. Leadership and community involvement.",
            "https://www.buickachievers.com/",
            "2026-02-28",
            "$25,000",
            true,
        ),
        entry(
            "5d9a0284",
            "Davidson Fellows Scholarship",
            "Students 18 or under. Must complete a significant project in STEM, literature, music, philosophy, or outside the box. U.S. citizen or permanent resident.",
            "https://www.davidsongifted.org/gifted-programs/fellows-scholarship/",
            "2026-02-11",
            "$10,000-$50,000",
            false,
        ),
        entry(
            "pev2026a",
            "Prudential Emerging Visionaries",
            "Ages 14-18. Must have created a financial or societal solution for your community. Replaces the former Prudential Spirit of Community Awards. U.S. residents.",
            "https://www.prudential.com/emerging-visionaries",
            "2026-11-01",
            "Up to $15,000",
            false,
        ),
        entry(
            "7fbc24a6",
            "Taco Bell Live Mas Scholarship",
            "Ages 16-26. Must be pursuing education at an accredited institution in the U.S. Based on passion and innovation, not just grades. No GPA minimum.",
            "https://www.tacobellfoundation.org/live-mas-scholarship/",
            "2026-01-24",
            "$5,000-$25,000",
            false,
        ),
        entry(
            "d65e378d",
            "Jackie Robinson Foundation Scholarship",
            "Minority high school senior with leadership potential. SAT/ACT scores considered. Financial need demonstrated. Must be U.S. citizen.",
            "https://www.jackierobinson.org/apply/",
            "2026-02-01",
            "Up to $30,000",
            true,
        ),
        entry(
            "fluncf26",
            "Foot Locker Foundation-UNCF Scholarship",
            "Students attending a UNCF member HBCU. Minimum 2.5 GPA. U.S. citizen, permanent resident, or national. Demonstrate financial need. Seeking bachelor's degree.",
            "https://uncf.org/scholarships",
            "2026-04-10",
            "$5,000",
            true,
        ),
        entry(
            "tmcfcoke",
            "TMCF Coca-Cola First Generation HBCU Scholarship",
            "First-generation college student. Graduating high school senior. Enrolling full-time at a TMCF member HBCU. Financial need. U.S. citizen or permanent resident.",
            "https://tmcf.org/",
            "2026-05-01",
            "$5,000",
            true,
        ),
    ]
}
