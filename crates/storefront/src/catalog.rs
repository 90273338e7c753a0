//! Static book catalog.
//!
//! The catalog is compiled into the binary. Listing, category and detail
//! pages only ever read it; filtering and sorting produce views over the
//! static slice.

use std::cmp::Ordering;

use max_publishing_core::{CartItem, Language, Localized, Price, discount_percent};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::i18n;

/// Category id that matches every book.
pub const ALL_CATEGORIES: &str = "all";

/// Default upper bound of the price filter, in euros.
pub const DEFAULT_MAX_PRICE: Decimal = Decimal::ONE_HUNDRED;

/// Number of related books on the detail page.
pub const RELATED_LIMIT: usize = 4;

/// A book for sale.
#[derive(Debug, Serialize)]
pub struct Book {
    pub id: &'static str,
    pub title: Localized,
    pub description: Localized,
    pub author: &'static str,
    pub price: Price,
    pub original_price: Option<Price>,
    pub image: &'static str,
    pub category: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub is_new: bool,
    pub is_bestseller: bool,
    pub published: Option<i32>,
}

impl Book {
    /// Cart line for one copy of this book.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.id.into(),
            title: self.title.clone(),
            author: self.author.to_string(),
            price: self.price,
            image: self.image.to_string(),
            quantity: 1,
        }
    }

    /// Percentage saved against the original price, if discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price
            .and_then(|original| discount_percent(original, self.price))
    }

    #[must_use]
    pub fn category(&self) -> Option<&'static Category> {
        category(self.category)
    }
}

/// A book category.
#[derive(Debug, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static Localized,
    /// CSS modifier used for the category chip.
    pub color: &'static str,
}

static CATEGORIES: [Category; 5] = [
    Category {
        id: "classics",
        name: &i18n::category::CLASSICS,
        color: "tone-blue",
    },
    Category {
        id: "poetry",
        name: &i18n::category::POETRY,
        color: "tone-purple",
    },
    Category {
        id: "science-fiction",
        name: &i18n::category::SCIENCE_FICTION,
        color: "tone-teal",
    },
    Category {
        id: "mystery",
        name: &i18n::category::MYSTERY,
        color: "tone-red",
    },
    Category {
        id: "philosophy",
        name: &i18n::category::PHILOSOPHY,
        color: "tone-amber",
    },
];

static BOOKS: [Book; 13] = [
    Book {
        id: "i-promessi-sposi",
        title: Localized::new("The Betrothed", "I Promessi Sposi"),
        description: Localized::new(
            "Renzo and Lucia, two young lovers from a village on Lake Como, are kept apart by a powerful nobleman in plague-stricken seventeenth-century Lombardy. The great novel of the Italian language.",
            "Renzo e Lucia, due giovani promessi di un paese sul lago di Como, vengono separati da un potente signorotto nella Lombardia del Seicento sconvolta dalla peste. Il grande romanzo della lingua italiana.",
        ),
        author: "Alessandro Manzoni",
        price: Price::from_cents(1490),
        original_price: Some(Price::from_cents(1800)),
        image: "/static/images/covers/i-promessi-sposi.svg",
        category: "classics",
        rating: 4.6,
        reviews: 1284,
        is_new: false,
        is_bestseller: true,
        published: Some(1827),
    },
    Book {
        id: "divina-commedia",
        title: Localized::new("The Divine Comedy", "La Divina Commedia"),
        description: Localized::new(
            "Dante's journey through Hell, Purgatory and Paradise, guided by Virgil and Beatrice. This edition includes the full text with introductions to each canto.",
            "Il viaggio di Dante attraverso Inferno, Purgatorio e Paradiso, guidato da Virgilio e Beatrice. Questa edizione include il testo integrale con un'introduzione a ogni canto.",
        ),
        author: "Dante Alighieri",
        price: Price::from_cents(1990),
        original_price: None,
        image: "/static/images/covers/divina-commedia.svg",
        category: "poetry",
        rating: 4.9,
        reviews: 2310,
        is_new: false,
        is_bestseller: true,
        published: Some(1321),
    },
    Book {
        id: "pride-and-prejudice",
        title: Localized::new("Pride and Prejudice", "Orgoglio e Pregiudizio"),
        description: Localized::new(
            "Elizabeth Bennet and Mr Darcy spar their way through misunderstandings, family pressures and first impressions in Austen's sharpest comedy of manners.",
            "Elizabeth Bennet e Mr Darcy si scontrano tra malintesi, pressioni familiari e prime impressioni nella più brillante commedia di costume di Jane Austen.",
        ),
        author: "Jane Austen",
        price: Price::from_cents(1250),
        original_price: None,
        image: "/static/images/covers/pride-and-prejudice.svg",
        category: "classics",
        rating: 4.7,
        reviews: 3120,
        is_new: false,
        is_bestseller: true,
        published: Some(1813),
    },
    Book {
        id: "frankenstein",
        title: Localized::new("Frankenstein", "Frankenstein"),
        description: Localized::new(
            "Victor Frankenstein gives life to a creature he cannot love, and both pay the price. The novel that founded science fiction.",
            "Victor Frankenstein dà vita a una creatura che non riesce ad amare, e entrambi ne pagano il prezzo. Il romanzo che ha fondato la fantascienza.",
        ),
        author: "Mary Shelley",
        price: Price::from_cents(1190),
        original_price: Some(Price::from_cents(1390)),
        image: "/static/images/covers/frankenstein.svg",
        category: "science-fiction",
        rating: 4.4,
        reviews: 1876,
        is_new: false,
        is_bestseller: false,
        published: Some(1818),
    },
    Book {
        id: "the-time-machine",
        title: Localized::new("The Time Machine", "La Macchina del Tempo"),
        description: Localized::new(
            "A Victorian inventor travels to the year 802,701 and finds humanity split into two strange species.",
            "Un inventore vittoriano viaggia fino all'anno 802.701 e trova l'umanità divisa in due strane specie.",
        ),
        author: "H. G. Wells",
        price: Price::from_cents(990),
        original_price: None,
        image: "/static/images/covers/the-time-machine.svg",
        category: "science-fiction",
        rating: 4.2,
        reviews: 964,
        is_new: true,
        is_bestseller: false,
        published: Some(1895),
    },
    Book {
        id: "hound-of-the-baskervilles",
        title: Localized::new("The Hound of the Baskervilles", "Il Mastino dei Baskerville"),
        description: Localized::new(
            "A spectral hound haunts the moors of Dartmoor, and Sherlock Holmes must separate legend from murder.",
            "Un mastino spettrale infesta la brughiera di Dartmoor e Sherlock Holmes deve separare la leggenda dall'omicidio.",
        ),
        author: "Arthur Conan Doyle",
        price: Price::from_cents(1090),
        original_price: None,
        image: "/static/images/covers/hound-of-the-baskervilles.svg",
        category: "mystery",
        rating: 4.5,
        reviews: 1540,
        is_new: true,
        is_bestseller: false,
        published: Some(1902),
    },
    Book {
        id: "the-moonstone",
        title: Localized::new("The Moonstone", "La Pietra di Luna"),
        description: Localized::new(
            "A sacred Indian diamond vanishes from a Yorkshire country house on the night of a birthday party. The first great detective novel in English.",
            "Un diamante sacro indiano scompare da una villa dello Yorkshire la notte di una festa di compleanno. Il primo grande romanzo poliziesco inglese.",
        ),
        author: "Wilkie Collins",
        price: Price::from_cents(1150),
        original_price: None,
        image: "/static/images/covers/the-moonstone.svg",
        category: "mystery",
        rating: 4.0,
        reviews: 420,
        is_new: true,
        is_bestseller: false,
        published: Some(1868),
    },
    Book {
        id: "meditations",
        title: Localized::new("Meditations", "Pensieri"),
        description: Localized::new(
            "The private notes of a Roman emperor on duty, loss and self-command. Stoic philosophy at its most personal.",
            "Gli appunti privati di un imperatore romano su dovere, perdita e dominio di sé. La filosofia stoica nella sua forma più intima.",
        ),
        author: "Marcus Aurelius",
        price: Price::from_cents(950),
        original_price: None,
        image: "/static/images/covers/meditations.svg",
        category: "philosophy",
        rating: 4.8,
        reviews: 2045,
        is_new: false,
        is_bestseller: true,
        published: None,
    },
    Book {
        id: "the-prince",
        title: Localized::new("The Prince", "Il Principe"),
        description: Localized::new(
            "Machiavelli's handbook on acquiring and keeping power, written for the Medici and read by every ruler since.",
            "Il trattato di Machiavelli su come conquistare e mantenere il potere, scritto per i Medici e letto da ogni sovrano da allora.",
        ),
        author: "Niccolò Machiavelli",
        price: Price::from_cents(890),
        original_price: Some(Price::from_cents(1090)),
        image: "/static/images/covers/the-prince.svg",
        category: "philosophy",
        rating: 4.3,
        reviews: 1422,
        is_new: false,
        is_bestseller: false,
        published: Some(1532),
    },
    Book {
        id: "the-art-of-war",
        title: Localized::new("The Art of War", "L'Arte della Guerra"),
        description: Localized::new(
            "Thirteen short chapters on strategy, deception and leadership that still shape business and military thinking.",
            "Tredici brevi capitoli su strategia, inganno e comando che ancora oggi influenzano il pensiero militare e aziendale.",
        ),
        author: "Sun Tzu",
        price: Price::from_cents(790),
        original_price: None,
        image: "/static/images/covers/the-art-of-war.svg",
        category: "philosophy",
        rating: 4.5,
        reviews: 1980,
        is_new: true,
        is_bestseller: false,
        published: None,
    },
    Book {
        id: "leaves-of-grass",
        title: Localized::new("Leaves of Grass", "Foglie d'Erba"),
        description: Localized::new(
            "Whitman's life work, a celebration of the self, the body and democratic America in free verse.",
            "L'opera di una vita di Whitman, una celebrazione dell'io, del corpo e dell'America democratica in versi liberi.",
        ),
        author: "Walt Whitman",
        price: Price::from_cents(1350),
        original_price: None,
        image: "/static/images/covers/leaves-of-grass.svg",
        category: "poetry",
        rating: 4.1,
        reviews: 512,
        is_new: false,
        is_bestseller: false,
        published: Some(1855),
    },
    Book {
        id: "count-of-monte-cristo",
        title: Localized::new("The Count of Monte Cristo", "Il Conte di Montecristo"),
        description: Localized::new(
            "Betrayed and imprisoned on the Château d'If, Edmond Dantès escapes with a fortune and a plan for revenge.",
            "Tradito e rinchiuso nel castello d'If, Edmond Dantès fugge con un tesoro e un piano di vendetta.",
        ),
        author: "Alexandre Dumas",
        price: Price::from_cents(1690),
        original_price: Some(Price::from_cents(2100)),
        image: "/static/images/covers/count-of-monte-cristo.svg",
        category: "classics",
        rating: 4.8,
        reviews: 2674,
        is_new: true,
        is_bestseller: true,
        published: Some(1844),
    },
    Book {
        id: "the-odyssey",
        title: Localized::new("The Odyssey", "L'Odissea"),
        description: Localized::new(
            "Odysseus spends ten years finding his way home from Troy, past the Cyclops, Circe and the Sirens.",
            "Ulisse impiega dieci anni per tornare a casa da Troia, tra il Ciclope, Circe e le Sirene.",
        ),
        author: "Homer",
        price: Price::from_cents(1550),
        original_price: None,
        image: "/static/images/covers/the-odyssey.svg",
        category: "poetry",
        rating: 4.6,
        reviews: 1733,
        is_new: false,
        is_bestseller: false,
        published: None,
    },
];

/// All books in catalog order.
#[must_use]
pub fn books() -> &'static [Book] {
    &BOOKS
}

/// Look up a book by id.
#[must_use]
pub fn book(id: &str) -> Option<&'static Book> {
    BOOKS.iter().find(|book| book.id == id)
}

/// All categories in display order.
#[must_use]
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by id.
#[must_use]
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.id == id)
}

/// Number of books in a category.
#[must_use]
pub fn category_count(id: &str) -> usize {
    BOOKS.iter().filter(|book| book.category == id).count()
}

/// Books flagged as new.
#[must_use]
pub fn new_releases() -> Vec<&'static Book> {
    BOOKS.iter().filter(|book| book.is_new).collect()
}

/// Books flagged as bestsellers.
#[must_use]
pub fn bestsellers() -> Vec<&'static Book> {
    BOOKS.iter().filter(|book| book.is_bestseller).collect()
}

/// Other books in the same category, in catalog order.
#[must_use]
pub fn related(book: &Book, limit: usize) -> Vec<&'static Book> {
    BOOKS
        .iter()
        .filter(|other| other.category == book.category && other.id != book.id)
        .take(limit)
        .collect()
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Title,
    Author,
    Price,
    Rating,
}

impl SortKey {
    pub const ALL: [Self; 4] = [Self::Title, Self::Author, Self::Price, Self::Rating];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Price => "price",
            Self::Rating => "rating",
        }
    }

    /// Parse a sort key; anything unknown sorts by title.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }
}

/// Filters and ordering for the book listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    /// Category id; `None` or `all` matches every book.
    pub category: Option<String>,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub sort: SortKey,
    /// Case-insensitive search over title and author.
    pub q: Option<String>,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            category: None,
            min_price: Decimal::ZERO,
            max_price: DEFAULT_MAX_PRICE,
            sort: SortKey::default(),
            q: None,
        }
    }
}

impl BookQuery {
    /// Clamp the price range (`min >= 0`, `max >= min`), drop blank search
    /// values and drop category ids that are blank, `all` or unknown.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.min_price = self.min_price.max(Decimal::ZERO);
        self.max_price = self.max_price.max(self.min_price);
        self.category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| category(c).is_some());
        self.q = self
            .q
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        self
    }

    /// Every book of one category, or of all of them, with no price bounds.
    #[must_use]
    pub fn category_only(category: Option<&str>) -> Self {
        Self {
            category: category.map(String::from),
            max_price: Decimal::MAX,
            ..Self::default()
        }
        .normalized()
    }

    /// Active category id, or `all`.
    #[must_use]
    pub fn category_id(&self) -> &str {
        self.category.as_deref().unwrap_or(ALL_CATEGORIES)
    }

    fn matches(&self, book: &Book, language: Language) -> bool {
        if let Some(category) = self.category.as_deref()
            && category != ALL_CATEGORIES
            && book.category != category
        {
            return false;
        }

        let price = book.price.amount();
        if price < self.min_price || price > self.max_price {
            return false;
        }

        self.q.as_deref().is_none_or(|q| {
            let needle = q.to_lowercase();
            book.title.get(language).to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
    }

    /// Books matching the query, sorted. Ties keep catalog order.
    #[must_use]
    pub fn filter_and_sort(&self, language: Language) -> Vec<&'static Book> {
        let mut books: Vec<&'static Book> = BOOKS
            .iter()
            .filter(|book| self.matches(book, language))
            .collect();

        match self.sort {
            SortKey::Title => books.sort_by_cached_key(|book| book.title.get(language).to_lowercase()),
            SortKey::Author => books.sort_by_cached_key(|book| book.author.to_lowercase()),
            SortKey::Price => books.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::Rating => books.sort_by(|a, b| compare_rating_desc(a.rating, b.rating)),
        }

        books
    }
}

fn compare_rating_desc(a: f32, b: f32) -> Ordering {
    b.total_cmp(&a)
}

/// Star breakdown for a 0-5 rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: usize,
    pub half: bool,
    pub empty: usize,
}

impl StarRating {
    /// `floor(r)` full stars, a half star for any fractional part, and
    /// `5 - ceil(r)` empty stars.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_rating(rating: f32) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, 5.0)
        };
        let full = rating.floor() as usize;
        let ceil = rating.ceil() as usize;
        Self {
            full,
            half: ceil > full,
            empty: 5 - ceil,
        }
    }
}
