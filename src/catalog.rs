//! Hand-curated investor profiles.
//!
//! Three lists live here: the last-resort fallback returned when the listing
//! cannot be fetched and nothing is cached, the curated set appended by the
//! free-text scan strategy, and the richer seed set an empty store starts with.

use crate::profile::InvestorProfile;

struct Entry {
    name: &'static str,
    title: &'static str,
    firm: &'static str,
    bio: &'static str,
    email: &'static str,
    website: Option<&'static str>,
    twitter: Option<&'static str>,
    image: Option<&'static str>,
    verified: bool,
    stages: &'static [&'static str],
    sectors: &'static [&'static str],
    check: (&'static str, &'static str),
    geo: &'static [&'static str],
    portfolio: &'static [&'static str],
}

impl Entry {
    fn to_profile(&self) -> InvestorProfile {
        let owned = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        InvestorProfile {
            name: self.name.to_string(),
            title: self.title.to_string(),
            firm: self.firm.to_string(),
            bio: self.bio.to_string(),
            email: self.email.to_string(),
            website: self.website.map(str::to_string),
            twitter_handle: self.twitter.map(str::to_string),
            image_url: self.image.map(str::to_string),
            is_verified: self.verified,
            investment_stages: owned(self.stages),
            sectors: owned(self.sectors),
            check_size_min: Some(self.check.0.to_string()),
            check_size_max: Some(self.check.1.to_string()),
            geographic_focus: owned(self.geo),
            portfolio_companies: owned(self.portfolio),
        }
    }
}

const FALLBACK: &[Entry] = &[
    Entry {
        name: "Reid Hoffman",
        title: "Partner",
        firm: "Greylock Partners",
        bio: "Co-founder of LinkedIn and Partner at Greylock Partners. Focus on consumer internet, enterprise software, and marketplace businesses.",
        email: "reid@greylock.com",
        website: Some("https://www.greylock.com"),
        twitter: Some("https://twitter.com/reidhoffman"),
        image: None,
        verified: true,
        stages: &["Seed", "Series A", "Series B"],
        sectors: &["Consumer", "Enterprise Software", "Marketplace"],
        check: ("$500K", "$10M"),
        geo: &["North America"],
        portfolio: &["LinkedIn", "Airbnb", "Facebook"],
    },
    Entry {
        name: "Marc Andreessen",
        title: "Co-Founder",
        firm: "Andreessen Horowitz",
        bio: "Co-founder of Andreessen Horowitz and Netscape. Leading investor in software, crypto, and bio companies.",
        email: "marc@a16z.com",
        website: Some("https://a16z.com"),
        twitter: Some("https://twitter.com/pmarca"),
        image: None,
        verified: true,
        stages: &["Seed", "Series A", "Series B", "Series C+"],
        sectors: &["Enterprise Software", "Crypto", "Biotech", "AI/ML"],
        check: ("$1M", "$50M"),
        geo: &["North America", "Global"],
        portfolio: &["Facebook", "Twitter", "Coinbase"],
    },
];

const CURATED: &[Entry] = &[
    Entry {
        name: "Ann Miura-Ko",
        title: "Co-Founding Partner",
        firm: "Floodgate",
        bio: "A repeat member of the Forbes Midas List and the New York Times Top 20 Venture Capitalists Worldwide. Ann was also named the \"Most Powerful Woman in Startups\" by Forbes.",
        email: "ann@floodgate.com",
        website: Some("https://www.floodgate.com"),
        twitter: Some("https://twitter.com/annimaniac"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["Fintech", "Consumer", "Enterprise Software"],
        check: ("$100K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["Lyft", "Xamarin", "Popshop"],
    },
    Entry {
        name: "Michael Gilroy",
        title: "General Partner",
        firm: "Coatue",
        bio: "Led rounds for Arbo, Bitso, Bond, Clara, Cloudwalk, Luna, Meld, Melio, Mercury, Pinwheel, Pleo, Quanto, Silverflow, Step.",
        email: "michael@coatue.com",
        website: Some("https://www.coatue.com"),
        twitter: Some("https://twitter.com/MBGilroy"),
        image: None,
        verified: true,
        stages: &["Seed", "Series A", "Series B"],
        sectors: &["Fintech", "Enterprise Software"],
        check: ("$500K", "$10M"),
        geo: &["North America", "Global"],
        portfolio: &["Mercury", "Melio", "Bond"],
    },
    Entry {
        name: "Sarah Guo",
        title: "General Partner",
        firm: "Conviction",
        bio: "VC partnering with entrepreneurs from idea to IPO. Former Greylock partner who led investments in 0x, Baseten, Cleo, Common Room.",
        email: "sarah@conviction.vc",
        website: Some("https://www.conviction.vc"),
        twitter: Some("https://twitter.com/saranormous"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["AI/ML", "Enterprise Software", "Developer Tools"],
        check: ("$250K", "$5M"),
        geo: &["North America"],
        portfolio: &["0x", "Baseten", "Cleo"],
    },
    Entry {
        name: "Bill Trenchard",
        title: "Partner",
        firm: "First Round Capital",
        bio: "Led investments in companies including Looker, Flexport, Verkada, Superhuman, Airbase, Nova Credit, Legion, and Labelbox.",
        email: "bill@firstround.com",
        website: Some("https://www.firstround.com"),
        twitter: Some("https://twitter.com/btrenchard"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["Enterprise Software", "Fintech", "Developer Tools"],
        check: ("$100K", "$3M"),
        geo: &["North America"],
        portfolio: &["Looker", "Flexport", "Verkada", "Superhuman"],
    },
    Entry {
        name: "Pete Flint",
        title: "General Partner",
        firm: "NFX",
        bio: "Co-founder and former CEO of Trulia. Expert in marketplace dynamics, network effects, and consumer technology.",
        email: "pete@nfx.com",
        website: Some("https://www.nfx.com"),
        twitter: Some("https://twitter.com/peteflint"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["Marketplace", "Consumer", "PropTech"],
        check: ("$250K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["Trulia", "Lyft", "Patreon", "DoorDash"],
    },
    Entry {
        name: "Satya Patel",
        title: "Partner",
        firm: "Homebrew",
        bio: "Former VP Product at Twitter. Previously Partner at Battery Ventures co-leading seed and early stage investing.",
        email: "satya@homebrew.co",
        website: Some("https://homebrew.co"),
        twitter: Some("https://twitter.com/satyap"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed"],
        sectors: &["Consumer", "Enterprise Software", "Developer Tools"],
        check: ("$100K", "$2M"),
        geo: &["North America"],
        portfolio: &["Twitter Products", "Various Early Stage"],
    },
    Entry {
        name: "Zach Bratun-Glennon",
        title: "Founder and Partner",
        firm: "Gradient Ventures",
        bio: "Previously led acquisitions at Google Corporate Development. Focus on AI/ML and enterprise software investments.",
        email: "zach@gradient.com",
        website: Some("https://www.gradient.com"),
        twitter: None,
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["AI/ML", "Enterprise Software", "Infrastructure"],
        check: ("$250K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["Openly", "Elsa", "Wise Systems"],
    },
    Entry {
        name: "Zal Bilimoria",
        title: "Founding Partner",
        firm: "Refactor Capital",
        bio: "Solo partner focused on climate, bio, and health investments. Previously helped launch Bio Fund at a16z.",
        email: "zal@refactor.capital",
        website: Some("https://refactor.capital"),
        twitter: Some("https://twitter.com/zalzally"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed"],
        sectors: &["Climate Tech", "Biotech", "Healthcare"],
        check: ("$50K", "$1M"),
        geo: &["North America"],
        portfolio: &["Various Climate & Bio Startups"],
    },
    Entry {
        name: "Aaref Hilaly",
        title: "Partner",
        firm: "Bain Capital Ventures",
        bio: "Co-founded two companies and spent seven years as a partner at Sequoia. Expert in enterprise software and B2B.",
        email: "aaref@baincapitalventures.com",
        website: Some("https://www.baincapitalventures.com"),
        twitter: Some("https://twitter.com/aaref"),
        image: None,
        verified: true,
        stages: &["Seed", "Series A", "Series B"],
        sectors: &["Enterprise Software", "Developer Tools", "Infrastructure"],
        check: ("$250K", "$10M"),
        geo: &["North America", "Global"],
        portfolio: &["Sequoia Portfolio", "Enterprise Startups"],
    },
    Entry {
        name: "Ryan Freedman",
        title: "General Partner",
        firm: "Alpaca VC",
        bio: "Entrepreneur turned investor focused on PropTech and real estate innovation. Founded Corigin with $600M AUM.",
        email: "ryan@alpaca.vc",
        website: Some("https://www.alpaca.vc"),
        twitter: Some("https://twitter.com/ryanfreedman_"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["PropTech", "Real Estate", "Fintech"],
        check: ("$100K", "$2M"),
        geo: &["North America"],
        portfolio: &["Corigin", "PropTech Startups"],
    },
    Entry {
        name: "Adriel Bercow",
        title: "Founding Partner",
        firm: "K50 Ventures",
        bio: "Invests in US and LATAM with focus on Work & Learning. Previously at Flybridge Capital Partners.",
        email: "adriel@k50.ventures",
        website: Some("https://k50.ventures"),
        twitter: Some("https://twitter.com/adrielbercow"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["EdTech", "Future of Work", "Consumer"],
        check: ("$100K", "$3M"),
        geo: &["North America", "Latin America"],
        portfolio: &["Worc", "Shift One", "Pallet", "Nirvana Health"],
    },
    Entry {
        name: "Abe Yokell",
        title: "Co-Founder and Managing Partner",
        firm: "Congruent Ventures",
        bio: "Focus on mobility and climate technology investments. Expert in transportation and energy solutions.",
        email: "abe@congruentvc.com",
        website: Some("https://www.congruentvc.com"),
        twitter: Some("https://twitter.com/CleanVC"),
        image: None,
        verified: true,
        stages: &["Seed", "Series A", "Series B"],
        sectors: &["Climate Tech", "Automotive", "Transportation", "Energy"],
        check: ("$100K", "$5M"),
        geo: &["North America"],
        portfolio: &["Mobility & Climate Startups"],
    },
    Entry {
        name: "Lenny Rachitsky",
        title: "Founder",
        firm: "Lenny Rachitsky Fund",
        bio: "Author of Lenny's Newsletter, #1 business newsletter on Substack. Expert in growth and product.",
        email: "lenny@lennyrachitsky.com",
        website: Some("https://www.lennyrachitsky.com"),
        twitter: Some("https://twitter.com/lennysan"),
        image: None,
        verified: true,
        stages: &["Pre-Seed", "Seed"],
        sectors: &["Consumer", "SaaS", "Growth Tools"],
        check: ("$25K", "$250K"),
        geo: &["Global"],
        portfolio: &["Growth & Product Companies"],
    },
];

const SEED: &[Entry] = &[
    Entry {
        name: "Ann Miura-Ko",
        title: "Co-Founding Partner",
        firm: "Floodgate",
        bio: "A repeat member of the Forbes Midas List and the New York Times Top 20 Venture Capitalists Worldwide. Ann was also named the 'Most Powerful Woman in Startups' by Forbes. Known for pioneering investments in highly technical companies with expertise in fintech, consumer commerce, and enterprise software.",
        email: "ann@floodgate.com",
        website: Some("https://www.floodgate.com"),
        twitter: Some("https://twitter.com/annimaniac"),
        image: Some("https://images.unsplash.com/photo-1494790108755-2616b612b786?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A", "Series B"],
        sectors: &["Fintech", "Consumer", "Enterprise Software", "AI/ML"],
        check: ("$100K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["Lyft", "Xamarin", "Popshop", "Emotive", "Refinery29"],
    },
    Entry {
        name: "Michael Gilroy",
        title: "Co-COO of Growth, Co-Head of Fintech, General Partner",
        firm: "Coatue",
        bio: "Led rounds for Arbo, Bitso, Bond, Clara, Cloudwalk, Luna, Meld, Melio, Mercury, Pinwheel, Pleo, Quanto, Silverflow, Step. Specialized in fintech investments across multiple stages with deep expertise in financial services technology.",
        email: "michael@coatue.com",
        website: Some("https://www.coatue.com"),
        twitter: Some("https://twitter.com/MBGilroy"),
        image: Some("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Seed", "Series A", "Series B", "Series C+"],
        sectors: &["Fintech", "Enterprise Software", "Consumer"],
        check: ("$500K", "$10M+"),
        geo: &["North America", "Global"],
        portfolio: &["Mercury", "Melio", "Bond", "Clara", "Bitso"],
    },
    Entry {
        name: "Sarah Guo",
        title: "General Partner",
        firm: "Conviction",
        bio: "VC partnering with entrepreneurs from idea to IPO. Former Greylock partner who led investments in fintech and enterprise companies. Prior Goldman Sachs experience advising pre-IPO technology companies including Workday, Netflix, and Nvidia.",
        email: "sarah@conviction.vc",
        website: Some("https://www.conviction.vc"),
        twitter: Some("https://twitter.com/saranormous"),
        image: Some("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A", "Series B"],
        sectors: &["Fintech", "Enterprise Software", "AI/ML", "Developer Tools"],
        check: ("$250K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["0x", "Baseten", "Cleo", "Common Room", "Demisto"],
    },
    Entry {
        name: "Bill Trenchard",
        title: "Partner",
        firm: "First Round Capital",
        bio: "Led investments in companies including Looker, Flexport, Verkada, Superhuman, Airbase, Nova Credit, Legion, and Labelbox. Focus on enterprise software, fintech solutions, and B2B marketplaces with deep operational expertise.",
        email: "bill@firstround.com",
        website: Some("https://www.firstround.com"),
        twitter: Some("https://twitter.com/btrenchard"),
        image: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["Enterprise Software", "Fintech", "B2B", "AI/ML"],
        check: ("$100K", "$3M"),
        geo: &["North America"],
        portfolio: &["Looker", "Flexport", "Verkada", "Superhuman", "Airbase"],
    },
    Entry {
        name: "Pete Flint",
        title: "General Partner",
        firm: "NFX",
        bio: "Co-founder and former CEO of Trulia, one of the internet's most successful marketplaces. Led the company from inception to $3.5B merger with Zillow. Expert in marketplace dynamics, network effects, and consumer technology.",
        email: "pete@nfx.com",
        website: Some("https://www.nfx.com"),
        twitter: Some("https://twitter.com/peteflint"),
        image: Some("https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A", "Series B"],
        sectors: &["Marketplace", "Consumer", "PropTech", "Network Effects"],
        check: ("$250K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["Trulia", "Lyft", "Patreon", "Doordash", "Zesty"],
    },
    Entry {
        name: "Ryan Freedman",
        title: "General Partner",
        firm: "Alpaca VC",
        bio: "Entrepreneur turned investor focused on bringing efficiency and innovation to real estate. Previously founded Corigin ($600M AUM) and Coral Capital ($1.5B+ financing). Pioneer in PropTech and real estate technology adoption.",
        email: "ryan@alpaca.vc",
        website: Some("https://www.alpaca.vc"),
        twitter: Some("https://twitter.com/ryanfreedman_"),
        image: Some("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["PropTech", "Real Estate", "Fintech", "B2B"],
        check: ("$100K", "$2M"),
        geo: &["North America"],
        portfolio: &["Corigin", "Coral Capital", "Various PropTech Startups"],
    },
    Entry {
        name: "Satya Patel",
        title: "Partner",
        firm: "Homebrew",
        bio: "Former VP Product at Twitter, building Product Management and User Services teams. Previously Partner at Battery Ventures co-leading seed and early stage investing. Joined Google in 2003 for AdSense product management.",
        email: "satya@homebrew.co",
        website: Some("https://homebrew.co"),
        twitter: Some("https://twitter.com/satyap"),
        image: Some("https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["Consumer", "Enterprise Software", "AI/ML", "Developer Tools"],
        check: ("$100K", "$2M"),
        geo: &["North America"],
        portfolio: &["Twitter", "Google", "Various Early Stage Startups"],
    },
    Entry {
        name: "Zach Bratun-Glennon",
        title: "Founder and Partner",
        firm: "Gradient Ventures",
        bio: "Prior to Gradient, led acquisitions and strategic investments at Google's Corporate Development team. Investment banking background advising software companies through M&As and IPOs. Serves on boards at Openly, Elsa, and Wise Systems.",
        email: "zach@gradient.com",
        website: Some("https://www.gradient.com"),
        twitter: Some("https://twitter.com/zachbg"),
        image: Some("https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A", "Series B"],
        sectors: &["AI/ML", "Enterprise Software", "Infrastructure", "Developer Tools"],
        check: ("$250K", "$5M"),
        geo: &["North America", "Global"],
        portfolio: &["Openly", "Elsa", "Wise Systems", "Various AI Startups"],
    },
    Entry {
        name: "Zal Bilimoria",
        title: "Founding Partner",
        firm: "Refactor Capital",
        bio: "Solo partner at Refactor Capital, seed-stage firm focused on climate, bio, and health investments. Previously helped launch the Bio Fund at a16z. Spent 10 years in product at Google, Netflix, and LinkedIn.",
        email: "zal@refactor.capital",
        website: Some("https://refactor.capital"),
        twitter: Some("https://twitter.com/zalzally"),
        image: Some("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed"],
        sectors: &["Climate Tech", "Biotech", "Healthcare", "Sustainability"],
        check: ("$50K", "$1M"),
        geo: &["North America"],
        portfolio: &["Various Climate & Bio Startups"],
    },
    Entry {
        name: "Aaref Hilaly",
        title: "Partner",
        firm: "Bain Capital Ventures",
        bio: "Prior to joining BCV, co-founded two companies and spent seven years as a partner at Sequoia. Deep expertise in enterprise software, developer tools, and B2B marketplaces with extensive operational experience.",
        email: "aaref@baincapitalventures.com",
        website: Some("https://www.baincapitalventures.com"),
        twitter: Some("https://twitter.com/aaref"),
        image: Some("https://images.unsplash.com/photo-1507591064344-4c6ce005b128?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A", "Series B"],
        sectors: &["Enterprise Software", "Developer Tools", "B2B", "Infrastructure"],
        check: ("$250K", "$10M"),
        geo: &["North America", "Global"],
        portfolio: &["Sequoia Portfolio", "Various Enterprise Startups"],
    },
    Entry {
        name: "Abe Yokell",
        title: "Co-Founder and Managing Partner",
        firm: "Congruent Ventures",
        bio: "Co-Founder and Managing Partner at Congruent Ventures, focused on mobility and climate technology investments. Deep expertise in transportation, energy, and sustainable technology solutions.",
        email: "abe@congruentvc.com",
        website: Some("https://www.congruentvc.com"),
        twitter: Some("https://twitter.com/CleanVC"),
        image: Some("https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A", "Series B"],
        sectors: &["Climate Tech", "Automotive", "Transportation", "Energy"],
        check: ("$100K", "$5M"),
        geo: &["North America"],
        portfolio: &["Various Mobility & Climate Startups"],
    },
    Entry {
        name: "Adriel Bercow",
        title: "Founding Partner",
        firm: "K50 Ventures",
        bio: "Invests in both US and LATAM with focus on Work & Learning. Led investments in Worc, Shift One, Pallet, and Nirvana Health. Previously at Flybridge Capital Partners supporting investments in Imperfect Foods, Wethos, and Narrator.",
        email: "adriel@k50.ventures",
        website: Some("https://k50.ventures"),
        twitter: Some("https://twitter.com/adrielbercow"),
        image: Some("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=400&h=400"),
        verified: true,
        stages: &["Pre-Seed", "Seed", "Series A"],
        sectors: &["EdTech", "Future of Work", "Consumer", "B2B"],
        check: ("$100K", "$3M"),
        geo: &["North America", "Latin America"],
        portfolio: &["Worc", "Shift One", "Pallet", "Nirvana Health"],
    },
];

/// Last-resort profiles for when the listing is unreachable and nothing is cached.
pub fn fallback() -> Vec<InvestorProfile> {
    FALLBACK.iter().map(Entry::to_profile).collect()
}

/// Curated profiles appended by the free-text scan.
pub fn curated() -> Vec<InvestorProfile> {
    CURATED.iter().map(Entry::to_profile).collect()
}

/// Initial contents of an empty store.
pub fn seed() -> Vec<InvestorProfile> {
    SEED.iter().map(Entry::to_profile).collect()
}
