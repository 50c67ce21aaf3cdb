use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};
use thiserror::Error;

static ITEM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^i(\d+)\|(\d+)\|(\d+)$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("malformed item id {0:?}, expected i<item>|<uses>|<quest>")]
    ItemId(String),
    #[error("unknown ship flag token {0:?}")]
    ShipFlag(String),
}

// ── Ship classes ──

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    #[default]
    Unknown,
    Transporter,
    Tanker,
    Korvette,
    Fregatte,
    Zerstoerer,
    Kreuzer,
    SchwererKreuzer,
    Schlachtschiff,
    Traeger,
    Jaeger,
    Bomber,
    Geschuetz,
    Awacs,
    Aufklaerer,
    Container,
    Station,
    Kolonieschiff,
    Forschungskreuzer,
    Schrottsammler,
}

impl ShipClass {
    pub const ALL: [ShipClass; 20] = [
        ShipClass::Unknown,
        ShipClass::Transporter,
        ShipClass::Tanker,
        ShipClass::Korvette,
        ShipClass::Fregatte,
        ShipClass::Zerstoerer,
        ShipClass::Kreuzer,
        ShipClass::SchwererKreuzer,
        ShipClass::Schlachtschiff,
        ShipClass::Traeger,
        ShipClass::Jaeger,
        ShipClass::Bomber,
        ShipClass::Geschuetz,
        ShipClass::Awacs,
        ShipClass::Aufklaerer,
        ShipClass::Container,
        ShipClass::Station,
        ShipClass::Kolonieschiff,
        ShipClass::Forschungskreuzer,
        ShipClass::Schrottsammler,
    ];

    /// (singular, plural) as printed on the page.
    pub fn names(self) -> (&'static str, &'static str) {
        match self {
            ShipClass::Unknown => ("Unbekannt", "Unbekannt"),
            ShipClass::Transporter => ("Transporter", "Transporter"),
            ShipClass::Tanker => ("Tanker", "Tanker"),
            ShipClass::Korvette => ("Korvette", "Korvetten"),
            ShipClass::Fregatte => ("Fregatte", "Fregatten"),
            ShipClass::Zerstoerer => ("Zerstörer", "Zerstörer"),
            ShipClass::Kreuzer => ("Kreuzer", "Kreuzer"),
            ShipClass::SchwererKreuzer => ("Schwerer Kreuzer", "Schwere Kreuzer"),
            ShipClass::Schlachtschiff => ("Schlachtschiff", "Schlachtschiffe"),
            ShipClass::Traeger => ("Träger", "Träger"),
            ShipClass::Jaeger => ("Jäger", "Jäger"),
            ShipClass::Bomber => ("Bomber", "Bomber"),
            ShipClass::Geschuetz => ("Geschütz", "Geschütze"),
            ShipClass::Awacs => ("AWACS", "AWACS"),
            ShipClass::Aufklaerer => ("Aufklärer", "Aufklärer"),
            ShipClass::Container => ("Container", "Container"),
            ShipClass::Station => ("Station", "Stationen"),
            ShipClass::Kolonieschiff => ("Kolonieschiff", "Kolonieschiffe"),
            ShipClass::Forschungskreuzer => ("Forschungskreuzer", "Forschungskreuzer"),
            ShipClass::Schrottsammler => ("Schrottsammler", "Schrottsammler"),
        }
    }

    /// Look up a class by its singular or plural name.
    pub fn from_name(name: &str) -> Option<ShipClass> {
        Self::ALL.into_iter().find(|c| {
            let (singular, plural) = c.names();
            singular == name || plural == name
        })
    }
}

// ── Ship flags ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipTypeFlag {
    Colonizer,
    Abfangen,
    NichtKaperbar,
    KeinTransfer,
    SrsAwac,
    SrsExtAwac,
    JumpdriveShivan,
    InstantBattleEnter,
    NichtPluenderbar,
    GodMode,
    Drohne,
    DrohnenController,
    SecondRow,
    OffiTransport,
    Werftkomplex,
    Tradepost,
    Versorger,
    NichtKolonisierbar,
}

impl ShipTypeFlag {
    pub const ALL: [ShipTypeFlag; 18] = [
        ShipTypeFlag::Colonizer,
        ShipTypeFlag::Abfangen,
        ShipTypeFlag::NichtKaperbar,
        ShipTypeFlag::KeinTransfer,
        ShipTypeFlag::SrsAwac,
        ShipTypeFlag::SrsExtAwac,
        ShipTypeFlag::JumpdriveShivan,
        ShipTypeFlag::InstantBattleEnter,
        ShipTypeFlag::NichtPluenderbar,
        ShipTypeFlag::GodMode,
        ShipTypeFlag::Drohne,
        ShipTypeFlag::DrohnenController,
        ShipTypeFlag::SecondRow,
        ShipTypeFlag::OffiTransport,
        ShipTypeFlag::Werftkomplex,
        ShipTypeFlag::Tradepost,
        ShipTypeFlag::Versorger,
        ShipTypeFlag::NichtKolonisierbar,
    ];

    /// Token stored in the encoded flag string.
    pub fn token(self) -> &'static str {
        match self {
            ShipTypeFlag::Colonizer => "colonizer",
            ShipTypeFlag::Abfangen => "abfangen",
            ShipTypeFlag::NichtKaperbar => "nicht_kaperbar",
            ShipTypeFlag::KeinTransfer => "kein_transfer",
            ShipTypeFlag::SrsAwac => "srs_awac",
            ShipTypeFlag::SrsExtAwac => "srs_ext_awac",
            ShipTypeFlag::JumpdriveShivan => "jumpdrive_shivan",
            ShipTypeFlag::InstantBattleEnter => "instant_battle_enter",
            ShipTypeFlag::NichtPluenderbar => "nicht_pluenderbar",
            ShipTypeFlag::GodMode => "god_mode",
            ShipTypeFlag::Drohne => "drohne",
            ShipTypeFlag::DrohnenController => "drohnen_controller",
            ShipTypeFlag::SecondRow => "secondrow",
            ShipTypeFlag::OffiTransport => "offitransport",
            ShipTypeFlag::Werftkomplex => "werftkomplex",
            ShipTypeFlag::Tradepost => "tradepost",
            ShipTypeFlag::Versorger => "versorger",
            ShipTypeFlag::NichtKolonisierbar => "nicht_kolonisierbar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShipTypeFlag::Colonizer => "Colonizer",
            ShipTypeFlag::Abfangen => "Abfangen",
            ShipTypeFlag::NichtKaperbar => "Nicht kaperbar",
            ShipTypeFlag::KeinTransfer => "Kein Transfer",
            ShipTypeFlag::SrsAwac => "SRS AWAC",
            ShipTypeFlag::SrsExtAwac => "SRS erweiterte AWAC",
            ShipTypeFlag::JumpdriveShivan => "Shivanischer Sprungantrieb",
            ShipTypeFlag::InstantBattleEnter => "Schneller Kampfeintritt",
            ShipTypeFlag::NichtPluenderbar => "Nicht plünderbar",
            ShipTypeFlag::GodMode => "Gottmodus",
            ShipTypeFlag::Drohne => "Drohne",
            ShipTypeFlag::DrohnenController => "Drohnen-Kontrollschiff",
            ShipTypeFlag::SecondRow => "Zweite Reihe",
            ShipTypeFlag::OffiTransport => "Offizierstransporter",
            ShipTypeFlag::Werftkomplex => "Werftkomplex",
            ShipTypeFlag::Tradepost => "Handelsposten",
            ShipTypeFlag::Versorger => "Versorger",
            ShipTypeFlag::NichtKolonisierbar => "Nicht kolonisierbar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ShipTypeFlag::Colonizer => "Dieses Schiff kann Asteroiden kolonisieren.",
            ShipTypeFlag::Abfangen => "Dieses Schiff kann feindliche Schiffe abfangen.",
            ShipTypeFlag::NichtKaperbar => "Dieses Schiff kann nicht gekapert werden.",
            ShipTypeFlag::KeinTransfer => "Es können keine Waren zu oder von diesem Schiff transferiert werden.",
            ShipTypeFlag::SrsAwac => "Dieses Schiff besitzt einen Kurzstrecken-AWAC-Scanner.",
            ShipTypeFlag::SrsExtAwac => "Dieses Schiff besitzt einen erweiterten Kurzstrecken-AWAC-Scanner.",
            ShipTypeFlag::JumpdriveShivan => "Dieses Schiff verfügt über einen shivanischen Sprungantrieb.",
            ShipTypeFlag::InstantBattleEnter => "Dieses Schiff kann ohne Verzögerung in Schlachten eingreifen.",
            ShipTypeFlag::NichtPluenderbar => "Dieses Schiff kann nicht geplündert werden.",
            ShipTypeFlag::GodMode => "Dieses Schiff ist unzerstörbar.",
            ShipTypeFlag::Drohne => "Dieses Schiff ist eine Drohne und benötigt ein Kontrollschiff.",
            ShipTypeFlag::DrohnenController => "Dieses Schiff kann Drohnen kontrollieren.",
            ShipTypeFlag::SecondRow => "Dieses Schiff kann in der zweiten Reihe stehen.",
            ShipTypeFlag::OffiTransport => "Dieses Schiff kann Offiziere transportieren.",
            ShipTypeFlag::Werftkomplex => "Dieses Schiff ist Teil eines Werftkomplexes.",
            ShipTypeFlag::Tradepost => "Dieses Schiff ist ein Handelsposten.",
            ShipTypeFlag::Versorger => "Dieses Schiff versorgt Schiffe im selben Sektor mit Nahrung.",
            ShipTypeFlag::NichtKolonisierbar => "Mit diesem Schiff kann nicht kolonisiert werden.",
        }
    }

    /// Match a page line against the flag labels and descriptions.
    pub fn from_line(line: &str) -> Option<ShipTypeFlag> {
        Self::ALL
            .into_iter()
            .find(|f| f.label() == line || f.description() == line)
    }

    /// Space-separated token string, the form stored on the ship type.
    pub fn encode<I: IntoIterator<Item = ShipTypeFlag>>(flags: I) -> String {
        flags
            .into_iter()
            .map(ShipTypeFlag::token)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn decode(s: &str) -> Result<BTreeSet<ShipTypeFlag>, CatalogError> {
        s.split_whitespace().map(str::parse::<ShipTypeFlag>).collect()
    }
}

impl FromStr for ShipTypeFlag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.token() == s)
            .ok_or_else(|| CatalogError::ShipFlag(s.to_string()))
    }
}

// ── Weapon flags ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponFlag {
    DestroyAfter,
    LongRange,
    VeryLongRange,
}

impl WeaponFlag {
    pub fn from_description(desc: &str) -> Option<WeaponFlag> {
        match desc {
            "Beim Angriff zerstört" => Some(WeaponFlag::DestroyAfter),
            "Große Reichweite" => Some(WeaponFlag::LongRange),
            "Sehr große Reichweite" => Some(WeaponFlag::VeryLongRange),
            _ => None,
        }
    }
}

// ── Races ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "i32")]
pub enum Race {
    Gcp,
    Terraner,
    Vasudaner,
    Shivaner,
    Uralte,
    Nomads,
    Ntf,
    HoL,
    Gtu,
    Piraten,
    Unknown,
}

impl Race {
    pub fn from_name(name: &str) -> Race {
        match name {
            "GCP" => Race::Gcp,
            "Terraner" => Race::Terraner,
            "Vasudaner" => Race::Vasudaner,
            "Shivaner" => Race::Shivaner,
            "Uralte" => Race::Uralte,
            "Nomads" => Race::Nomads,
            "NTF" => Race::Ntf,
            "HoL" => Race::HoL,
            "GTU" => Race::Gtu,
            "Piraten" => Race::Piraten,
            _ => Race::Unknown,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            Race::Gcp => 0,
            Race::Terraner => 1,
            Race::Vasudaner => 2,
            Race::Shivaner => 3,
            Race::Uralte => 4,
            Race::Nomads => 5,
            Race::Ntf => 6,
            Race::HoL => 7,
            Race::Gtu => 8,
            Race::Piraten => 9,
            Race::Unknown => -1,
        }
    }
}

impl From<Race> for i32 {
    fn from(race: Race) -> i32 {
        race.id()
    }
}

// ── Items ──

/// Resource id as carried in `ds-item-id` attributes: `i<item>|<uses>|<quest>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId {
    pub item: u32,
    pub uses: u32,
    pub quest: u32,
}

impl FromStr for ItemId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ITEM_ID_RE
            .captures(s.trim())
            .ok_or_else(|| CatalogError::ItemId(s.to_string()))?;
        let field = |i: usize| {
            caps[i]
                .parse::<u32>()
                .map_err(|_| CatalogError::ItemId(s.to_string()))
        };
        Ok(ItemId {
            item: field(1)?,
            uses: field(2)?,
            quest: field(3)?,
        })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}|{}|{}", self.item, self.uses, self.quest)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ship_class_by_singular_or_plural() {
        assert_eq!(ShipClass::from_name("Geschütz"), Some(ShipClass::Geschuetz));
        assert_eq!(ShipClass::from_name("Geschütze"), Some(ShipClass::Geschuetz));
        assert_eq!(ShipClass::from_name("Schwere Kreuzer"), Some(ShipClass::SchwererKreuzer));
        assert_eq!(ShipClass::from_name("Raumschiff"), None);
    }

    #[test]
    fn flag_from_label_or_description() {
        assert_eq!(ShipTypeFlag::from_line("Versorger"), Some(ShipTypeFlag::Versorger));
        assert_eq!(
            ShipTypeFlag::from_line("Dieses Schiff kann nicht gekapert werden."),
            Some(ShipTypeFlag::NichtKaperbar)
        );
        assert_eq!(ShipTypeFlag::from_line("versorger"), None);
    }

    #[test]
    fn flag_set_round_trip() {
        let flags = [
            ShipTypeFlag::Versorger,
            ShipTypeFlag::Colonizer,
            ShipTypeFlag::SrsAwac,
        ];
        let encoded = ShipTypeFlag::encode(flags);
        assert_eq!(encoded, "versorger colonizer srs_awac");
        let decoded = ShipTypeFlag::decode(&encoded).unwrap();
        assert_eq!(decoded, flags.into_iter().collect::<BTreeSet<_>>());
    }

    #[test]
    fn flag_decode_rejects_unknown_token() {
        assert_eq!(
            ShipTypeFlag::decode("versorger warp"),
            Err(CatalogError::ShipFlag("warp".into()))
        );
        assert!(ShipTypeFlag::decode("").unwrap().is_empty());
    }

    #[test]
    fn race_ids() {
        assert_eq!(Race::from_name("GCP").id(), 0);
        assert_eq!(Race::from_name("Piraten").id(), 9);
        assert_eq!(Race::from_name("Borg").id(), -1);
        assert_eq!(serde_json::to_string(&Race::Shivaner).unwrap(), "3");
    }

    #[test]
    fn item_id_parse_and_display() {
        let id: ItemId = "i12|0|3".parse().unwrap();
        assert_eq!(id, ItemId { item: 12, uses: 0, quest: 3 });
        assert_eq!(id.to_string(), "i12|0|3");
        assert!("12|0|3".parse::<ItemId>().is_err());
        assert!("i12|x|3".parse::<ItemId>().is_err());
    }
}
