//! Company directory with display names and panel-convention symbols.

use std::collections::{HashMap, HashSet};

/// Symbols whose exchange listing uses a dot but whose panel source quotes
/// them with a dash. Fixed, known exceptions.
const SYMBOL_CORRECTIONS: &[(&str, &str)] = &[("BRK.B", "BRK-B"), ("BF.B", "BF-B")];

/// Rewrite a dotted class-share symbol into the panel source's quoting
/// convention. Symbols outside the fixed exception table pass through
/// unchanged.
pub fn correct_symbol(symbol: &str) -> String {
    SYMBOL_CORRECTIONS
        .iter()
        .find(|(listed, _)| *listed == symbol)
        .map_or_else(|| symbol.to_string(), |(_, quoted)| (*quoted).to_string())
}

/// A directory entry: one company and its market identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Display name.
    pub name: String,
    /// Market identifier, in the panel source's quoting convention.
    pub symbol: String,
}

impl Company {
    /// Create a new directory entry. The symbol is stored as given; apply
    /// [`correct_symbol`] first when the source uses exchange notation.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Read-only directory of known companies, sorted by display name and
/// deduplicated by symbol.
#[derive(Debug, Clone)]
pub struct TickerDirectory {
    companies: Vec<Company>,
    name_to_symbol: HashMap<String, String>,
}

impl TickerDirectory {
    /// Build a directory from `(name, symbol)` pairs as supplied by an
    /// external constituent listing.
    ///
    /// Symbols run through the correction table, duplicates (by corrected
    /// symbol) keep their first occurrence, and the result is sorted by
    /// display name.
    pub fn from_pairs<I, N, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut companies: Vec<Company> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (name, symbol) in pairs {
            let symbol = correct_symbol(&symbol.into());
            if seen.insert(symbol.clone()) {
                companies.push(Company::new(name, symbol));
            }
        }
        companies.sort_by(|a, b| a.name.cmp(&b.name));

        let name_to_symbol = companies
            .iter()
            .map(|company| (company.name.clone(), company.symbol.clone()))
            .collect();

        Self {
            companies,
            name_to_symbol,
        }
    }

    /// The bundled S&P 500 directory (100+ constituents).
    pub fn sp500() -> Self {
        Self::from_pairs(Self::default_constituents().iter().copied())
    }

    /// All directory entries, sorted by display name.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    /// All symbols, in display-name order.
    pub fn symbols(&self) -> Vec<String> {
        self.companies
            .iter()
            .map(|company| company.symbol.clone())
            .collect()
    }

    /// Look up the symbol for a company display name.
    pub fn symbol_for(&self, name: &str) -> Option<&str> {
        self.name_to_symbol.get(name).map(String::as_str)
    }

    /// Default S&P 500 constituents (100+ stocks), as `(name, symbol)` pairs
    /// in exchange notation.
    fn default_constituents() -> &'static [(&'static str, &'static str)] {
        &[
            ("3M", "MMM"),
            ("Abbott Laboratories", "ABT"),
            ("AbbVie", "ABBV"),
            ("Accenture", "ACN"),
            ("Adobe", "ADBE"),
            ("Advanced Micro Devices", "AMD"),
            ("Air Products", "APD"),
            ("Alphabet (Class A)", "GOOGL"),
            ("Alphabet (Class C)", "GOOG"),
            ("Altria", "MO"),
            ("Amazon", "AMZN"),
            ("American Electric Power", "AEP"),
            ("American Express", "AXP"),
            ("American Tower", "AMT"),
            ("Amgen", "AMGN"),
            ("Apple", "AAPL"),
            ("AT&T", "T"),
            ("Bank of America", "BAC"),
            ("Berkshire Hathaway (Class B)", "BRK.B"),
            ("BlackRock", "BLK"),
            ("Boeing", "BA"),
            ("Booking Holdings", "BKNG"),
            ("Bristol-Myers Squibb", "BMY"),
            ("Broadcom", "AVGO"),
            ("Brown-Forman (Class B)", "BF.B"),
            ("Caterpillar", "CAT"),
            ("Charles Schwab", "SCHW"),
            ("Chevron", "CVX"),
            ("Chipotle Mexican Grill", "CMG"),
            ("Cisco Systems", "CSCO"),
            ("Citigroup", "C"),
            ("Coca-Cola", "KO"),
            ("Colgate-Palmolive", "CL"),
            ("Comcast", "CMCSA"),
            ("ConocoPhillips", "COP"),
            ("Constellation Energy", "CEG"),
            ("Costco", "COST"),
            ("Crown Castle", "CCI"),
            ("Danaher", "DHR"),
            ("Deere & Company", "DE"),
            ("Dominion Energy", "D"),
            ("Dow", "DOW"),
            ("Duke Energy", "DUK"),
            ("DuPont", "DD"),
            ("Ecolab", "ECL"),
            ("Electronic Arts", "EA"),
            ("Eli Lilly", "LLY"),
            ("EOG Resources", "EOG"),
            ("Equinix", "EQIX"),
            ("Exelon", "EXC"),
            ("Exxon Mobil", "XOM"),
            ("FedEx", "FDX"),
            ("Ford Motor", "F"),
            ("Freeport-McMoRan", "FCX"),
            ("GE Aerospace", "GE"),
            ("General Motors", "GM"),
            ("Gilead Sciences", "GILD"),
            ("Goldman Sachs", "GS"),
            ("Halliburton", "HAL"),
            ("Home Depot", "HD"),
            ("Honeywell", "HON"),
            ("IBM", "IBM"),
            ("Intel", "INTC"),
            ("JPMorgan Chase", "JPM"),
            ("Johnson & Johnson", "JNJ"),
            ("Kraft Heinz", "KHC"),
            ("Linde", "LIN"),
            ("Lockheed Martin", "LMT"),
            ("Lowe's", "LOW"),
            ("Marathon Petroleum", "MPC"),
            ("Mastercard", "MA"),
            ("McDonald's", "MCD"),
            ("Merck & Co.", "MRK"),
            ("Meta Platforms", "META"),
            ("Microsoft", "MSFT"),
            ("Mondelez International", "MDLZ"),
            ("Morgan Stanley", "MS"),
            ("Netflix", "NFLX"),
            ("Newmont", "NEM"),
            ("NextEra Energy", "NEE"),
            ("Nike", "NKE"),
            ("Norfolk Southern", "NSC"),
            ("Nucor", "NUE"),
            ("Nvidia", "NVDA"),
            ("Occidental Petroleum", "OXY"),
            ("Oracle", "ORCL"),
            ("PepsiCo", "PEP"),
            ("Pfizer", "PFE"),
            ("Philip Morris International", "PM"),
            ("Phillips 66", "PSX"),
            ("PPG Industries", "PPG"),
            ("Procter & Gamble", "PG"),
            ("Prologis", "PLD"),
            ("Public Storage", "PSA"),
            ("Qualcomm", "QCOM"),
            ("Realty Income", "O"),
            ("RTX Corporation", "RTX"),
            ("Salesforce", "CRM"),
            ("Schlumberger", "SLB"),
            ("ServiceNow", "NOW"),
            ("Sherwin-Williams", "SHW"),
            ("Simon Property Group", "SPG"),
            ("Southern Company", "SO"),
            ("Starbucks", "SBUX"),
            ("T-Mobile US", "TMUS"),
            ("Tesla", "TSLA"),
            ("Texas Instruments", "TXN"),
            ("Thermo Fisher Scientific", "TMO"),
            ("TJX Companies", "TJX"),
            ("Union Pacific", "UNP"),
            ("UnitedHealth Group", "UNH"),
            ("United Parcel Service", "UPS"),
            ("Valero Energy", "VLO"),
            ("Verizon", "VZ"),
            ("Visa", "V"),
            ("Walmart", "WMT"),
            ("Walt Disney", "DIS"),
            ("Welltower", "WELL"),
            ("Wells Fargo", "WFC"),
            ("Xcel Energy", "XEL"),
        ]
    }
}

impl Default for TickerDirectory {
    fn default() -> Self {
        Self::sp500()
    }
}
