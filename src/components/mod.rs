pub mod greeting_view;
