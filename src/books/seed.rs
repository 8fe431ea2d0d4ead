use crate::books::domain::model::BookEntity;

// Catalog contents every fresh catalog process starts with.
pub(crate) fn seed_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new(1, "To Kill a Mockingbird", true).with_details(
            "Harper Lee", "Fiction", 1960,
            "A novel about the serious issues of rape and racial inequality narrated by young Scout Finch."),
        BookEntity::new(2, "1984", false).with_details(
            "George Orwell", "Dystopian", 1949,
            "A dystopian social science fiction novel and cautionary tale about the dangers of totalitarianism."),
        BookEntity::new(3, "Moby Dick", true).with_details(
            "Herman Melville", "Adventure", 1851,
            "The story of Captain Ahab's obsessive quest to kill the white whale Moby Dick."),
        BookEntity::new(4, "Pride and Prejudice", true).with_details(
            "Jane Austen", "Romance", 1813,
            "A romantic novel that charts the emotional development of protagonist Elizabeth Bennet."),
        BookEntity::new(5, "The Great Gatsby", false).with_details(
            "F. Scott Fitzgerald", "Tragedy", 1925,
            "A critique of the American Dream set in the Jazz Age, focusing on Jay Gatsby and his unrequited love for Daisy."),
        BookEntity::new(6, "The Catcher in the Rye", true).with_details(
            "J.D. Salinger", "Fiction", 1951,
            "A story about teenage angst and alienation narrated by the disillusioned Holden Caulfield."),
        BookEntity::new(7, "The Hobbit", true).with_details(
            "J.R.R. Tolkien", "Fantasy", 1937,
            "The prelude to 'The Lord of the Rings,' following Bilbo Baggins' adventurous journey to win treasure guarded by Smaug."),
        BookEntity::new(8, "War and Peace", false).with_details(
            "Leo Tolstoy", "Historical", 1869,
            "A historical novel that intertwines themes of war, love, and societal change during Napoleon's invasion of Russia."),
        BookEntity::new(9, "The Alchemist", true).with_details(
            "Paulo Coelho", "Adventure", 1988,
            "A philosophical tale about a shepherd's journey in search of treasure and his own destiny."),
        BookEntity::new(10, "Crime and Punishment", true).with_details(
            "Fyodor Dostoevsky", "Psychological Fiction", 1866,
            "An intense psychological drama about a man wrestling with guilt and redemption after committing murder."),
    ]
}
