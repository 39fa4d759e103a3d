pub mod color_scale;
pub mod countries;
pub mod flavor;
pub mod flavor_wheel;
pub mod lang;
pub mod notes;
pub mod review;
pub mod scores;
pub mod whisky;

pub use color_scale::{color_name, color_swatch, ColorSwatch, WHISKY_COLORS};
pub use countries::{country_flag, country_name, Country, COUNTRIES};
pub use flavor::{dedupe_entries, FlavorEntry, FlavorSet, DEFAULT_STRENGTH};
pub use flavor_wheel::{find_tag, tag_name, FlavorCategory, FlavorSubCategory, FlavorTag, LocalName, FLAVOR_WHEEL};
pub use lang::Lang;
pub use notes::Notes;
pub use review::{Rebuy, Review, ReviewDraft, ReviewInput};
pub use scores::ScoreCard;
pub use whisky::{BottlingType, Whisky};
