mod budget_tests;
mod jsdoc_tests;
