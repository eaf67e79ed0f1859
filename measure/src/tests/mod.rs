mod monomial;


// Unit tests
mod prefix;

// Error tests
mod error;
