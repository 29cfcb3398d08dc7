mod support;

mod resolver_tests;
