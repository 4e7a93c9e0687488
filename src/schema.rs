//! Hardcoded field sets for the two review systems.

/// Columns of a WooCommerce review export that the mapper reads.
pub const WOO_FIELDS: [&str; 7] = [
    "body",
    "author",
    "email",
    "date",
    "product_id",
    "product_handle",
    "review_score",
];

/// Judge.me import columns, in the order Judge.me expects them.
pub const JUDGEME_HEADERS: [&str; 15] = [
    "title",
    "body",
    "rating",
    "review_date",
    "source",
    "curated",
    "reviewer_name",
    "reviewer_email",
    "product_id",
    "product_handle",
    "reply",
    "reply_date",
    "picture_urls",
    "ip_address",
    "location",
];

/// WooCommerce column -> Judge.me column.
pub const WOO_TO_JUDGEME: [(&str, &str); 7] = [
    ("body", "body"),
    ("author", "reviewer_name"),
    ("email", "reviewer_email"),
    ("date", "review_date"),
    ("product_id", "product_id"),
    ("product_handle", "product_handle"),
    ("review_score", "rating"),
];

/// Provenance tag written to every converted review.
pub const SOURCE_WOOCOMMERCE: &str = "WooCommerce";

/// Curation flag written to every converted review.
pub const CURATED_OK: &str = "ok";

/// Preferred column order used by the header normalizer.
///
/// The Judge.me columns followed by the metaobject handle used by Shopify imports.
pub const PREFERRED_ORDER: [&str; 16] = [
    "title",
    "body",
    "rating",
    "review_date",
    "source",
    "curated",
    "reviewer_name",
    "reviewer_email",
    "product_id",
    "product_handle",
    "reply",
    "reply_date",
    "picture_urls",
    "ip_address",
    "location",
    "metaobject_handle",
];
