//! The built-in dataset: forty curated titles.

use super::Audience;

/// Rows are (title, author, genre, audience). Order is the catalog order
/// that every query preserves.
pub(super) const BUILTIN_BOOKS: &[(&str, &str, &str, Audience)] = &[
    (
        "Introduction to Algorithms",
        "Thomas H. Cormen",
        "Educational",
        Audience::Student,
    ),
    ("Lean In", "Sheryl Sandberg", "Self-Help", Audience::Professional),
    (
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "Fiction",
        Audience::CasualReader,
    ),
    (
        "To Kill a Mockingbird",
        "Harper Lee",
        "Fiction",
        Audience::CasualReader,
    ),
    ("Sapiens", "Yuval Noah Harari", "Non-Fiction", Audience::Student),
    ("Atomic Habits", "James Clear", "Self-Help", Audience::Professional),
    ("Clean Code", "Robert C. Martin", "Educational", Audience::Student),
    ("Harry Potter", "J.K. Rowling", "Fantasy", Audience::CasualReader),
    (
        "The Pragmatic Programmer",
        "Andrew Hunt",
        "Educational",
        Audience::Student,
    ),
    ("Educated", "Tara Westover", "Biography", Audience::Professional),
    ("1984", "George Orwell", "Dystopian", Audience::CasualReader),
    (
        "Pride and Prejudice",
        "Jane Austen",
        "Romance",
        Audience::CasualReader,
    ),
    ("Deep Work", "Cal Newport", "Productivity", Audience::Professional),
    (
        "The Power of Habit",
        "Charles Duhigg",
        "Self-Help",
        Audience::Professional,
    ),
    ("The Alchemist", "Paulo Coelho", "Fiction", Audience::CasualReader),
    (
        "Thinking, Fast and Slow",
        "Daniel Kahneman",
        "Psychology",
        Audience::Student,
    ),
    (
        "The Catcher in the Rye",
        "J.D. Salinger",
        "Fiction",
        Audience::CasualReader,
    ),
    (
        "The Subtle Art of Not Giving a F*ck",
        "Mark Manson",
        "Self-Help",
        Audience::Professional,
    ),
    ("The Art of War", "Sun Tzu", "Philosophy", Audience::Student),
    (
        "Meditations",
        "Marcus Aurelius",
        "Philosophy",
        Audience::Professional,
    ),
    ("The Lean Startup", "Eric Ries", "Business", Audience::Professional),
    ("Zero to One", "Peter Thiel", "Business", Audience::Professional),
    (
        "The Four Agreements",
        "Don Miguel Ruiz",
        "Self-Help",
        Audience::CasualReader,
    ),
    (
        "The 7 Habits of Highly Effective People",
        "Stephen R. Covey",
        "Self-Help",
        Audience::Professional,
    ),
    (
        "How to Win Friends and Influence People",
        "Dale Carnegie",
        "Self-Help",
        Audience::Professional,
    ),
    ("The Road", "Cormac McCarthy", "Fiction", Audience::CasualReader),
    (
        "Brave New World",
        "Aldous Huxley",
        "Dystopian",
        Audience::CasualReader,
    ),
    (
        "The Fellowship of the Ring",
        "J.R.R. Tolkien",
        "Fantasy",
        Audience::CasualReader,
    ),
    ("The Hobbit", "J.R.R. Tolkien", "Fantasy", Audience::CasualReader),
    (
        "The Art of Computer Programming",
        "Donald Knuth",
        "Educational",
        Audience::Student,
    ),
    (
        "Cracking the Coding Interview",
        "Gayle Laakmann McDowell",
        "Educational",
        Audience::Student,
    ),
    (
        "Hooked: How to Build Habit-Forming Products",
        "Nir Eyal",
        "Business",
        Audience::Professional,
    ),
    ("Becoming", "Michelle Obama", "Biography", Audience::CasualReader),
    (
        "A Brief History of Time",
        "Stephen Hawking",
        "Science",
        Audience::Student,
    ),
    ("The Selfish Gene", "Richard Dawkins", "Science", Audience::Student),
    ("Dune", "Frank Herbert", "Science Fiction", Audience::CasualReader),
    (
        "Foundation",
        "Isaac Asimov",
        "Science Fiction",
        Audience::CasualReader,
    ),
    (
        "The Girl with the Dragon Tattoo",
        "Stieg Larsson",
        "Mystery",
        Audience::CasualReader,
    ),
    ("Gone Girl", "Gillian Flynn", "Mystery", Audience::CasualReader),
    (
        "Man’s Search for Meaning",
        "Viktor E. Frankl",
        "Psychology",
        Audience::Professional,
    ),
];
