/// Extension-based categorization of newly created files.
///
/// Every file lands in exactly one category folder. The built-in buckets are
/// modelled by [`Category`]; the lookup itself goes through a [`CategoryTable`]
/// so configuration can add new buckets or reassign extensions.
///
/// # Examples
///
/// ```
/// use sortwatch::file_category::CategoryTable;
///
/// let table = CategoryTable::standard();
/// assert_eq!(table.category_for("jpg"), "IMAGES");
/// assert_eq!(table.category_for("pdf"), "DOCUMENTS");
/// assert_eq!(table.category_for("zip"), "OTHER");
/// ```
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// The built-in categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// jpg, png, gif
    Images,
    /// doc, docx, pdf, odt, txt
    Documents,
    /// mp4, mov, avi
    Video,
    /// mp3, flac
    Sound,
    /// Anything without a matching extension
    Other,
}

impl Category {
    /// All categories that own extensions, in lookup-table order.
    pub const MAPPED: [Category; 4] = [
        Category::Images,
        Category::Documents,
        Category::Video,
        Category::Sound,
    ];

    /// Returns the folder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortwatch::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "IMAGES");
    /// assert_eq!(Category::Other.dir_name(), "OTHER");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "IMAGES",
            Category::Documents => "DOCUMENTS",
            Category::Video => "VIDEO",
            Category::Sound => "SOUND",
            Category::Other => "OTHER",
        }
    }

    /// Returns the extensions that map to this category out of the box.
    pub fn standard_extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Images => &["jpg", "png", "gif"],
            Category::Documents => &["doc", "docx", "pdf", "odt", "txt"],
            Category::Video => &["mp4", "mov", "avi"],
            Category::Sound => &["mp3", "flac"],
            Category::Other => &[],
        }
    }
}

static STANDARD_TABLE: LazyLock<CategoryTable> = LazyLock::new(CategoryTable::new);

/// Maps file extensions to category folder names.
///
/// Matching is exact and case-sensitive: `JPG` is not `jpg`.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    extension_map: HashMap<String, String>,
}

impl CategoryTable {
    /// Creates a table holding the standard mappings.
    pub fn new() -> Self {
        let mut table = Self {
            extension_map: HashMap::new(),
        };
        for category in Category::MAPPED {
            for ext in category.standard_extensions() {
                table.add_extension_mapping(ext, category.dir_name());
            }
        }
        table
    }

    /// Returns the shared, process-wide standard table.
    pub fn standard() -> &'static CategoryTable {
        &STANDARD_TABLE
    }

    /// Builds a table from the standard mappings plus configured categories.
    ///
    /// A configured extension is reassigned to its configured category even if
    /// a built-in category already claims it.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::standard().clone();
        for (category, extensions) in overrides {
            for ext in extensions {
                table.add_extension_mapping(ext, category);
            }
        }
        table
    }

    /// Adds (or reassigns) an extension to a category.
    pub fn add_extension_mapping(&mut self, ext: &str, category: &str) {
        self.extension_map
            .insert(ext.to_string(), category.to_string());
    }

    /// Returns the category that claims `ext`, if any.
    pub fn extension_to_category(&self, ext: &str) -> Option<&str> {
        self.extension_map.get(ext).map(String::as_str)
    }

    /// Returns the category folder for `ext`, falling back to `OTHER`.
    pub fn category_for(&self, ext: &str) -> &str {
        self.extension_to_category(ext)
            .unwrap_or(Category::Other.dir_name())
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new()
    }
}
