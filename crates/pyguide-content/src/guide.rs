//! The fixed guide content
//!
//! Eight sections comparing Python's list and tuple data structures. The
//! order of the entries is the order they appear in the generated PDF.
//! Body text keeps its original Unicode punctuation (arrows, en-dashes);
//! the renderer sanitizes it before writing.

use crate::section::Section;

/// Document title, rendered as the centered header on every page
pub const GUIDE_TITLE: &str = "Python List vs Tuple - Complete Guide";

/// Build the guide content table, in render order
pub fn guide_sections() -> Vec<Section> {
    vec![
        Section::new(
            "Definition",
            "\
List and Tuple are Python data structures used to store multiple items.

- List: [1, 2, 3] → Mutable (can change)
- Tuple: (1, 2, 3) → Immutable (cannot change)",
        ),
        Section::new(
            "Comparison Table",
            "\
| Feature        | List                | Tuple               |
|----------------|---------------------|----------------------|
| Syntax         | [1, 2, 3]           | (1, 2, 3)            |
| Mutable        | Yes                 | No                   |
| Memory usage   | Higher              | Lower                |
| Speed          | Slower              | Faster               |
| Methods        | Many (append, pop)  | Few (count, index)   |
| Dict Key Usage | No                  | Yes                  |",
        ),
        Section::new(
            "Mutability Example",
            "\
List (Mutable):
my_list = [1, 2, 3]
my_list.append(4)  # Works

Tuple (Immutable):
my_tuple = (1, 2, 3)
my_tuple[0] = 10   # Error!",
        ),
        Section::new(
            "Why Tuple is Faster",
            "\
Tuples are faster because:
- Fixed size – no dynamic resizing
- Fewer operations to support
- More memory efficient

Tuples help optimize performance where data is fixed.",
        ),
        Section::new(
            "Memory Check Example",
            "\
import sys

a = [1, 2, 3]
b = (1, 2, 3)

print(sys.getsizeof(a))  # List memory
print(sys.getsizeof(b))  # Tuple memory",
        ),
        Section::new(
            "When to Use What",
            "\
Use List:
- When you need to change, add, or remove items
- For dynamic data (e.g., user input)

Use Tuple:
- When data is fixed (coordinates, DB rows)
- As dictionary keys (immutable & hashable)",
        ),
        Section::new(
            "Overwriting Concept",
            "\
a = [1, 2, 3]
a = (1, 2, 3)  # List is overwritten by tuple

print(type(a))  # Output: <class 'tuple'>",
        ),
        Section::new(
            "Summary",
            "\
- List: Mutable, slower, uses more memory
- Tuple: Immutable, faster, uses less memory
- Use list for dynamic data, tuple for fixed data
- Variable can be overwritten if reused",
        ),
    ]
}
