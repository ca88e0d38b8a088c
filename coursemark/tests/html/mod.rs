mod deparse;
