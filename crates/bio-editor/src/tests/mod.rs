mod example_content;
