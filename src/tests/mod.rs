pub mod api_static_pages;
