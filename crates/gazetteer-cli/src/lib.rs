//! gazetteer-cli
//! =============
//!
//! Command-line front end for `gazetteer-core`: turns the GeoNames
//! postal-code export into `postal-codes.json`.
//!
//! The crate ships a binary (`postal-gazetteer`). This library target exists
//! so that docs.rs renders an overview page.
//!
//! ```text
//! cargo install gazetteer-cli
//! postal-gazetteer --input geonames-postal-code@public.geojson --output postal-codes.json
//! postal-gazetteer --yes            # download if missing, overwrite without asking
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
