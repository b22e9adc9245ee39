mod test_dashboard;
